pub const TITLE_TEXT: &str = r#"
 __  __   ___    ___   _  _   ___   _       _     ___
|  \/  | / _ \  / _ \ | \| | | __| | |     /_\   | _ \
| |\/| || (_) || (_) || .` | | _|  | |__  / _ \  |  _/
|_|  |_| \___/  \___/ |_|\_| |_|   |____|/_/ \_\ |_|
"#;

pub const MENU_WIDTH: u16 = 60;
pub const OPTION_PADDING: u16 = 2;
