use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Knowledge domain selected for the session.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Tm,
    Ps,
    Lo,
    Gen,
    Id,
    Pe,
    Ui,
    Ml,
    Sys,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Tm,
        Category::Ps,
        Category::Lo,
        Category::Gen,
        Category::Id,
        Category::Pe,
        Category::Ui,
        Category::Ml,
        Category::Sys,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Category::Tm => "TM",
            Category::Ps => "PS",
            Category::Lo => "LO",
            Category::Gen => "GEN",
            Category::Id => "ID",
            Category::Pe => "PE",
            Category::Ui => "UI",
            Category::Ml => "ML",
            Category::Sys => "SYS",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Category::ALL
            .into_iter()
            .find(|c| c.code() == wanted)
            .ok_or_else(|| {
                let codes: Vec<&str> = Category::ALL.iter().map(|c| c.code()).collect();
                format!("Unknown category '{}' (expected one of {})", s, codes.join(", "))
            })
    }
}
