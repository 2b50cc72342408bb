use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub name: Style,
    pub label: Style,
    pub muted: Style,
    pub page: Style,
    pub soon: Style,
}

pub static ADDRBOOK_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    name: Style::new().bold(),
    label: Style::new().cyan(),
    muted: Style::new().color256(246).italic(),
    page: Style::new().yellow(),
    soon: Style::new().green().bold(),
});
