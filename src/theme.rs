use rand::Rng;
use rand::seq::SliceRandom;

pub const DEFAULT_THEME: &str = "default";

/// Card palette. `back`/`fore` fill the card, the four accents color the
/// stat rows, and `username` highlights the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub back: &'static str,
    pub fore: &'static str,
    pub green: &'static str,
    pub purple: &'static str,
    pub orange: &'static str,
    pub cyan: &'static str,
    pub username: &'static str,
}

impl Theme {
    /// The `theme.*` fields available to the template.
    pub fn fields(&self) -> [(&'static str, &'static str); 8] {
        [
            ("name", self.name),
            ("back", self.back),
            ("fore", self.fore),
            ("green", self.green),
            ("purple", self.purple),
            ("orange", self.orange),
            ("cyan", self.cyan),
            ("username", self.username),
        ]
    }
}

pub static THEMES: [Theme; 9] = [
    Theme {
        name: "ubuntu",
        back: "#300a24",
        fore: "#ffffff",
        green: "#ffffff",
        purple: "#ffffff",
        orange: "#ffffff",
        cyan: "#ffffff",
        username: "#5cbe09",
    },
    Theme {
        name: "default",
        back: "#272822",
        fore: "#f8f8f2",
        green: "#a6e22e",
        purple: "#ae81ff",
        orange: "#cc6633",
        cyan: "#8be9fd",
        username: "#f70202",
    },
    Theme {
        name: "dracula",
        back: "#282A36",
        fore: "#F8F8F2",
        green: "#50fa7b",
        purple: "#bd93f9",
        orange: "#ffb86c",
        cyan: "#8be9fd",
        username: "#E356A7",
    },
    Theme {
        name: "monokai",
        back: "#2e2e2e",
        fore: "#d6d6d6",
        green: "#b4d273",
        purple: "#9e86c8",
        orange: "#e87d3e",
        cyan: "#8be9fd",
        username: "#f92672",
    },
    Theme {
        name: "atom",
        back: "#161719",
        fore: "#c5c8c6",
        green: "#94fa36",
        purple: "#b9b6fc",
        orange: "#f5ffa8",
        cyan: "#85befd",
        username: "#fd5ff1",
    },
    Theme {
        name: "github",
        back: "#f4f4f4",
        fore: "#3e3e3e",
        green: "#87d5a2",
        purple: "#e94691",
        orange: "#2e6cba",
        cyan: "#666666",
        username: "#de0000",
    },
    Theme {
        name: "googledark",
        back: "#202124",
        fore: "#E8EAED",
        green: "#34A853",
        purple: "#A142F4",
        orange: "#FBBC05",
        cyan: "#EA4335",
        username: "#4285F4",
    },
    Theme {
        name: "googlelight",
        back: "#FFFFFF",
        fore: "#5F6368",
        green: "#34A853",
        purple: "#A142F4",
        orange: "#EA4335",
        cyan: "#24C1E0",
        username: "#4285F4",
    },
    Theme {
        name: "powershell",
        back: "#052454",
        fore: "#F6F6F7",
        green: "#1CFE3C",
        purple: "#D33682",
        orange: "#FEFE45",
        cyan: "#EF2929",
        username: "#F6F6F7",
    },
];

/// Look up a theme by name, falling back to "default".
pub fn select_theme(name: Option<&str>) -> &'static Theme {
    name.and_then(|n| THEMES.iter().find(|t| t.name == n))
        .unwrap_or_else(default_theme)
}

fn default_theme() -> &'static Theme {
    THEMES
        .iter()
        .find(|t| t.name == DEFAULT_THEME)
        .unwrap_or(&THEMES[0])
}

/// Uniformly random theme name.
pub fn random_theme_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    THEMES.choose(rng).map_or(DEFAULT_THEME, |t| t.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_select_known_theme() {
        let theme = select_theme(Some("dracula"));
        assert_eq!(theme.name, "dracula");
        assert_eq!(theme.back, "#282A36");
        assert_eq!(theme.username, "#E356A7");
    }

    #[test]
    fn test_unknown_or_missing_name_falls_back_to_default() {
        assert_eq!(select_theme(Some("nonexistent")).name, "default");
        assert_eq!(select_theme(None).name, "default");
        assert_eq!(select_theme(None).back, "#272822");
    }

    #[test]
    fn test_theme_names_are_unique() {
        let names: HashSet<_> = THEMES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), THEMES.len());
        for expected in [
            "ubuntu",
            "default",
            "dracula",
            "monokai",
            "atom",
            "github",
            "googledark",
            "googlelight",
            "powershell",
        ] {
            assert!(names.contains(expected), "missing theme {expected}");
        }
    }

    #[test]
    fn test_every_color_is_hex() {
        for theme in &THEMES {
            for (field, value) in theme.fields().iter().skip(1) {
                assert!(
                    value.starts_with('#') && value.len() == 7,
                    "{}.{field} = {value}",
                    theme.name
                );
            }
        }
    }

    #[test]
    fn test_random_theme_name_is_a_known_theme() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let name = random_theme_name(&mut rng);
            assert_eq!(select_theme(Some(name)).name, name);
        }
    }
}
