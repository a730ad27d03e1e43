use std::fmt;

/// Book category offered in the tag selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Fiction,
    NonFiction,
    Science,
    History,
    Biography,
    Fantasy,
    Romance,
    Mystery,
    Technology,
    SelfHelp,
    Business,
    Poetry,
    Art,
    Cooking,
    Travel,
    YoungAdult,
    Horror,
}

impl Tag {
    /// Every tag, in display order.
    pub const ALL: [Tag; 17] = [
        Tag::Fiction,
        Tag::NonFiction,
        Tag::Science,
        Tag::History,
        Tag::Biography,
        Tag::Fantasy,
        Tag::Romance,
        Tag::Mystery,
        Tag::Technology,
        Tag::SelfHelp,
        Tag::Business,
        Tag::Poetry,
        Tag::Art,
        Tag::Cooking,
        Tag::Travel,
        Tag::YoungAdult,
        Tag::Horror,
    ];

    /// Display label; also the subject term sent to the search API.
    pub fn label(self) -> &'static str {
        match self {
            Tag::Fiction => "Fiction",
            Tag::NonFiction => "Non-Fiction",
            Tag::Science => "Science",
            Tag::History => "History",
            Tag::Biography => "Biography",
            Tag::Fantasy => "Fantasy",
            Tag::Romance => "Romance",
            Tag::Mystery => "Mystery",
            Tag::Technology => "Technology",
            Tag::SelfHelp => "Self-Help",
            Tag::Business => "Business",
            Tag::Poetry => "Poetry",
            Tag::Art => "Art",
            Tag::Cooking => "Cooking",
            Tag::Travel => "Travel",
            Tag::YoungAdult => "Young adult",
            Tag::Horror => "Horror",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Separator placed between subject terms in the search query.
pub const SUBJECT_SEPARATOR: &str = "+subject:";

/// Tags chosen by the user, kept in the order they were toggled on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    tags: Vec<Tag>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the tag if absent, removes it if present.
    pub fn toggle(&mut self, tag: Tag) {
        if let Some(pos) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag);
        }
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Subject terms joined with [`SUBJECT_SEPARATOR`]; the caller prefixes
    /// the first `subject:`.
    pub fn query(&self) -> String {
        self.tags
            .iter()
            .map(|tag| tag.label())
            .collect::<Vec<_>>()
            .join(SUBJECT_SEPARATOR)
    }
}
