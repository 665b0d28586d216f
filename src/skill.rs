use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, SkillError};

/// Color tags handed out by `add` when no color is given, in preference order.
pub const DEFAULT_COLORS: [&str; 5] = ["html", "css", "js", "react", "node"];
/// Category stored when `add` is called without one.
pub const DEFAULT_CATEGORY: &str = "General";

const MAX_COLOR_USES: usize = 2;

const NAME: &str = "name";
const PERCENTAGE: &str = "percentage";
const COLOR_CLASS: &str = "colorClass";
const CATEGORY: &str = "category";

/// One entry of the `skills` array.
///
/// The entry is kept as the JSON object read from disk, keys in file order,
/// so values of an unexpected type or keys this tool does not know about
/// survive a rewrite untouched. The accessors read the well-known keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillRecord {
    fields: Map<String, Value>,
}

impl SkillRecord {
    pub fn new(
        name: impl Into<String>,
        percentage: i64,
        color_class: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert(NAME.to_string(), Value::String(name.into()));
        fields.insert(PERCENTAGE.to_string(), Value::from(percentage));
        fields.insert(COLOR_CLASS.to_string(), Value::String(color_class.into()));
        fields.insert(CATEGORY.to_string(), Value::String(category.into()));
        Self { fields }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get(NAME).and_then(Value::as_str)
    }

    /// Raw percentage value; hand-edited files may hold a string or a float.
    pub fn percentage(&self) -> Option<&Value> {
        self.fields.get(PERCENTAGE)
    }

    pub fn color_class(&self) -> Option<&str> {
        self.fields.get(COLOR_CLASS).and_then(Value::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.fields.get(CATEGORY).and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.fields
    }

    /// Replaces the percentage in place and returns the previous value.
    pub fn set_percentage(&mut self, percentage: i64) -> Option<Value> {
        self.fields
            .insert(PERCENTAGE.to_string(), Value::from(percentage))
    }

    /// Case-insensitive name comparison. A record without a string name
    /// matches nothing.
    pub fn matches(&self, name: &str) -> bool {
        self.name()
            .is_some_and(|own| fold_name(own) == fold_name(name))
    }
}

/// The whole backing file: a `skills` array plus whatever else lives beside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDocument {
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkillDocument {
    pub fn contains(&self, name: &str) -> bool {
        self.skills.iter().any(|skill| skill.matches(name))
    }

    /// Appends a record, keeping insertion order.
    pub fn push(&mut self, skill: SkillRecord) {
        self.skills.push(skill);
    }

    /// Drops every record matching `name` and returns how many went away.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.skills.len();
        self.skills.retain(|skill| !skill.matches(name));
        before - self.skills.len()
    }

    /// Sets the percentage of the first record matching `name`.
    ///
    /// Returns the previous value (`Value::Null` if the record had none), or
    /// `None` when nothing matched.
    pub fn update_percentage(&mut self, name: &str, percentage: i64) -> Option<Value> {
        let skill = self.skills.iter_mut().find(|skill| skill.matches(name))?;
        Some(skill.set_percentage(percentage).unwrap_or(Value::Null))
    }
}

/// Ordered, non-empty set of color tags with a per-tag usage cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Returns `None` for an empty list.
    pub fn new(colors: Vec<String>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// First tag used fewer than twice by `skills`, else the first tag.
    pub fn pick(&self, skills: &[SkillRecord]) -> &str {
        self.colors
            .iter()
            .find(|color| color_uses(skills, color) < MAX_COLOR_USES)
            .unwrap_or(&self.colors[0])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

fn color_uses(skills: &[SkillRecord], color: &str) -> usize {
    skills
        .iter()
        .filter(|skill| skill.color_class() == Some(color))
        .count()
}

/// Canonical form used for every name comparison.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Parses a percentage given on the command line.
pub fn parse_percentage(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| SkillError::InvalidPercentage(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_uses_ignores_records_without_color() {
        let mut bare = SkillRecord::new("Bare", 10, "html", "General");
        bare.fields_mut().remove(COLOR_CLASS);
        let skills = vec![bare, SkillRecord::new("HTML", 90, "html", "General")];
        assert_eq!(color_uses(&skills, "html"), 1);
    }

    #[test]
    fn fold_name_lowercases_unicode() {
        assert_eq!(fold_name("ÄRGER"), fold_name("ärger"));
    }

    #[test]
    fn set_percentage_keeps_key_position() {
        let mut skill: SkillRecord =
            serde_json::from_str(r#"{"percentage": "75", "name": "Go"}"#).expect("json");
        assert_eq!(skill.set_percentage(80), Some(Value::from("75")));
        let keys: Vec<&str> = skill.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, [PERCENTAGE, NAME]);
    }
}
