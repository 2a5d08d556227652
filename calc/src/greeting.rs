//! Greeting with an optional courtesy title chosen from a fixed table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    Mr,
    Ms,
    Mx,
}

impl Title {
    pub fn as_str(self) -> &'static str {
        match self {
            Title::Mr => "Mr.",
            Title::Ms => "Ms.",
            Title::Mx => "Mx.",
        }
    }
}

// Preferences such as "prefer_not_to_say" are deliberately absent: they, and
// anything unrecognized, get no title.
const TITLES: &[(&str, Title)] = &[
    ("male", Title::Mr),
    ("female", Title::Ms),
    ("woman", Title::Ms),
    ("non_binary", Title::Mx),
    ("non-binary", Title::Mx),
    ("nonbinary", Title::Mx),
    ("nb", Title::Mx),
    ("neutral", Title::Mx),
    ("gender-neutral", Title::Mx),
];

/// Case-insensitive title lookup for a stated preference.
pub fn title_for(preference: &str) -> Option<Title> {
    let key = preference.trim().to_lowercase();
    TITLES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, title)| *title)
}

pub fn greet(name: &str, preference: &str) -> String {
    match title_for(preference) {
        Some(title) => format!("Hello, {} {name}! Welcome.", title.as_str()),
        None => format!("Hello, {name}! Welcome."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titled_greetings() {
        assert_eq!(greet("John", "male"), "Hello, Mr. John! Welcome.");
        assert_eq!(greet("Sarah", "Female"), "Hello, Ms. Sarah! Welcome.");
        assert_eq!(greet("Alex", "non_binary"), "Hello, Mx. Alex! Welcome.");
        assert_eq!(greet("Taylor", " NON-BINARY "), "Hello, Mx. Taylor! Welcome.");
        assert_eq!(greet("Jordan", "neutral"), "Hello, Mx. Jordan! Welcome.");
    }

    #[test]
    fn untitled_greetings() {
        assert_eq!(greet("Morgan", ""), "Hello, Morgan! Welcome.");
        assert_eq!(greet("Casey", "prefer_not_to_say"), "Hello, Casey! Welcome.");
        assert_eq!(greet("Riley", "unknown"), "Hello, Riley! Welcome.");
    }

    #[test]
    fn every_table_entry_resolves() {
        for (name, title) in TITLES {
            assert_eq!(title_for(&name.to_uppercase()), Some(*title));
        }
    }
}
