
/// Menu with a comment header, menu parameters, a text node and a button
pub(super) const OPTIONS: &str = "// Options menu
menu options {
\tpos \"0 0\"
\tsize \"1024 768\"

\t// Title
\ttext title {
\t\tstring \"_Options\"
\t\tpos \"50 20\"
\t\tsize \"200 30\"
\t}

\tbutton quit {
\t\tpos \"50 100\"
\t\tsize \"120 40\"
\t\tclick { cmd \"mn_pop;\" }
\t}
}
";
