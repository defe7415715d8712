// The ASCII art shown in the left column

/// Leading and trailing blank lines are trimmed before layout; indentation
/// inside the art is significant.
pub const LOGO: &str = r#"

  ___
 / _ \
/ /_\ \_ __   ___ _ __
|  _  | '_ \ / _ \ '__|
| | | | |_) |  __/ |
\_| |_/ .__/ \___|_|
      | |
      |_|

"#;
