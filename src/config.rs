use clap::ValueEnum;

pub const DEFAULT_AVATAR_URL: &str =
    "https://cdn4.iconfinder.com/data/icons/instagram-ui-twotone/48/Paul-18-512.png";
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://instagram.com/";
pub const DEFAULT_VERIFIED_BADGE: &str = "✔";

/// User-facing strings of the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub title: &'static str,
    pub start_prompt: &'static str,
    pub reload_prompt: &'static str,
    pub path_label: &'static str,
    pub show_verified: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub prev: &'static str,
    pub next: &'static str,
    pub page: &'static str,
    pub of: &'static str,
    pub users: &'static str,
    pub private: &'static str,
    pub public: &'static str,
    pub title_keys: &'static str,
    pub key_help: &'static str,
    pub status_title: &'static str,
    pub loading: &'static str,
    pub loaded: &'static str,
    pub error: &'static str,
}

impl Locale {
    pub fn spanish() -> Self {
        Self {
            title: "IgVendettapp",
            start_prompt: "¡Cargue un archivo JSON para comenzar!",
            reload_prompt: "¡Cargue un nuevo archivo JSON!",
            path_label: "Archivo",
            show_verified: "Mostrar verificados",
            yes: "Sí",
            no: "No",
            prev: "Anterior",
            next: "Siguiente",
            page: "Página",
            of: "de",
            users: "usuarios",
            private: "Privado",
            public: "Público",
            title_keys: "Tab archivo | ←/→ páginas | v verificados | q salir",
            key_help: "Tab: archivo | Enter: cargar | ←/→: páginas | v: filtro | Ctrl+C: salir",
            status_title: "Estado",
            loading: "Cargando",
            loaded: "usuarios cargados",
            error: "Error",
        }
    }

    pub fn english() -> Self {
        Self {
            title: "IgVendettapp",
            start_prompt: "Load a JSON file to get started!",
            reload_prompt: "Load a new JSON file!",
            path_label: "File",
            show_verified: "Show verified",
            yes: "Yes",
            no: "No",
            prev: "Previous",
            next: "Next",
            page: "Page",
            of: "of",
            users: "users",
            private: "Private",
            public: "Public",
            title_keys: "Tab file | ←/→ pages | v verified | q quit",
            key_help: "Tab: file prompt | Enter: load | ←/→: pages | v: filter | Ctrl+C: quit",
            status_title: "Status",
            loading: "Loading",
            loaded: "users loaded",
            error: "Error",
        }
    }

    pub fn page_status(&self, current: usize, total_pages: usize, total_users: usize) -> String {
        format!(
            "{} {current} {} {total_pages} ({total_users} {})",
            self.page, self.of, self.users
        )
    }

    pub fn toggle_label(&self, show_verified: bool) -> String {
        let value = if show_verified { self.yes } else { self.no };
        format!("{}: {value}", self.show_verified)
    }

    pub fn privacy_label(&self, is_private: bool) -> &'static str {
        if is_private {
            self.private
        } else {
            self.public
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::spanish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleChoice {
    #[value(name = "es")]
    Spanish,
    #[value(name = "en")]
    English,
}

impl From<LocaleChoice> for Locale {
    fn from(choice: LocaleChoice) -> Self {
        match choice {
            LocaleChoice::Spanish => Locale::spanish(),
            LocaleChoice::English => Locale::english(),
        }
    }
}

/// Knobs of the profile viewer. The plain variant (no filter toggle) is
/// `filtering: false`.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub filtering: bool,
    pub locale: Locale,
    pub verified_badge: String,
    pub default_avatar: String,
    pub profile_base_url: String,
    pub surface_errors: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            filtering: true,
            locale: Locale::default(),
            verified_badge: DEFAULT_VERIFIED_BADGE.to_string(),
            default_avatar: DEFAULT_AVATAR_URL.to_string(),
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            surface_errors: true,
        }
    }
}
