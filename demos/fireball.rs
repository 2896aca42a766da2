//! Runs the fireball demo.
//!
//! ```bash
//! cargo run --example fireball
//! ```
//!
//! Use the panel to change the tessellation level, flame colors, and
//! noise settings; Escape quits.

fn main() {
    env_logger::init();

    let app = fireball::default();
    app.run();
}
