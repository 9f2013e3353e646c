use serde::{Deserialize, Serialize};

/// Generation options. Only `dark_mode` affects output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    #[serde(default)]
    pub dark_mode: bool,
}

impl GenerateOptions {
    pub fn dark() -> Self {
        Self { dark_mode: true }
    }

    pub fn light() -> Self {
        Self { dark_mode: false }
    }

    /// Body of the `ThemeData(...)` call, one property per line.
    pub fn theme_lines(&self) -> &'static [&'static str] {
        if self.dark_mode {
            &[
                "brightness: Brightness.dark,",
                "primarySwatch: Colors.blue,",
                "scaffoldBackgroundColor: const Color(0xFF121212),",
                "appBarTheme: const AppBarTheme(",
                "  backgroundColor: Color(0xFF1E1E1E),",
                "  elevation: 0,",
                "),",
            ]
        } else {
            &[
                "brightness: Brightness.light,",
                "primarySwatch: Colors.blue,",
                "scaffoldBackgroundColor: Colors.white,",
                "appBarTheme: const AppBarTheme(",
                "  backgroundColor: Colors.white,",
                "  foregroundColor: Colors.black,",
                "  elevation: 0,",
                "),",
            ]
        }
    }
}
