use dioxus::prelude::*;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value of the `data-theme` attribute and the theme cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Current mode, shared as context by the app shell.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        let next = self.mode.read().toggled();
        self.mode.set(next);
        set_theme(next);
    }
}

/// Apply the saved theme cookie (or the OS preference) on startup.
/// Render once near the root.
#[component]
pub fn ThemeSeed() -> Element {
    let mut state = use_context::<ThemeState>();
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(
                r#"
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                var theme = match ? match[1]
                    : (window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light');
                document.documentElement.setAttribute('data-theme', theme);
                dioxus.send(theme);
                "#,
            );
            if let Ok(theme) = eval.recv::<String>().await {
                state.mode.set(ThemeMode::from_key(&theme));
            }
        });
    });

    rsx! {}
}

/// Persist `mode` to a cookie and apply it to the document root.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    document::eval(&format!(
        r#"
        document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
        document.documentElement.setAttribute('data-theme', '{theme}');
        "#,
    ));
}
