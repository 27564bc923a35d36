//! Common menu file fixtures for tests.

/// A small main menu in the usual tab-indented style
pub const MAIN_MENU: &str = "// ==================
// MAIN MENU
// ==================

menu main {
\tpos \"0 0\"
\tsize \"1024 768\"
\tbackground pics/menu/main_bg

\t/* title block */
\ttext title {
\t\tstring \"_UFO: Alien Invasion\"
\t\tpos \"312 50\"
\t\tsize \"400 40\"
\t\tfont f_big
\t}

\tbutton start {
\t\tstring \"_Start\"
\t\tpos \"412 300\"
\t\tsize \"200 30\"
\t\tclick { cmd \"game_new;\" }
\t}

\tbutton quit {
\t\tstring \"_Quit\"
\t\tpos \"412 350\"
\t\tsize \"200 30\"
\t\tclick { cmd \"quit;\" }
\t}
}
";

/// Two menus whose panels still use the legacy `origin` key
pub const LEGACY_PANELS: &str = "menu options {
\torigin \"0 0\"
\tpanel video {
\t\torigin \"10 20\"
\t\tsize \"300 200\"
\t}
\ttext caption {
\t\torigin \"15 25\"
\t\tstring \"_Video\"
\t}
}

menu popup_info {
\torigin \"100 100\"
}
";

/// The minimal example from the file format description
pub const NODE_A: &str = "menu m { node_a { pos \"10 20\" } }";

/// Menu with a single `origin` parameter
pub const ORIGIN_ONLY: &str = "menu m {\n\torigin \"0 0\"\n}\n";

/// Definition of `shared` for multi-file loading tests
pub const SHARED_FIRST: &str = "menu shared {\n\ttext from_first { }\n}\n";
pub const SHARED_SECOND: &str = "menu shared {\n\ttext from_second { }\n}\n";
