// File: src/item.rs
// Purpose: Catalog records and the bookable-item tagged union

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceCategory {
    Surfing,
    Diving,
    Snorkeling,
    Kayaking,
    Paddleboarding,
    Sailing,
    Fishing,
    Windsurfing,
}

impl ExperienceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceCategory::Surfing => "surfing",
            ExperienceCategory::Diving => "diving",
            ExperienceCategory::Snorkeling => "snorkeling",
            ExperienceCategory::Kayaking => "kayaking",
            ExperienceCategory::Paddleboarding => "paddleboarding",
            ExperienceCategory::Sailing => "sailing",
            ExperienceCategory::Fishing => "fishing",
            ExperienceCategory::Windsurfing => "windsurfing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCategory {
    Surfboard,
    Kayak,
    Paddleboard,
    Wetsuit,
    Snorkel,
    Diving,
    Sailing,
    Fishing,
}

impl EquipmentCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            EquipmentCategory::Surfboard => "surfboard",
            EquipmentCategory::Kayak => "kayak",
            EquipmentCategory::Paddleboard => "paddleboard",
            EquipmentCategory::Wetsuit => "wetsuit",
            EquipmentCategory::Snorkel => "snorkel",
            EquipmentCategory::Diving => "diving",
            EquipmentCategory::Sailing => "sailing",
            EquipmentCategory::Fishing => "fishing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Fair,
}

/// Guided, scheduled activity priced per participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub category: ExperienceCategory,
    /// Minutes
    pub duration: u32,
    pub max_participants: u32,
    pub price_per_participant: f64,
    pub difficulty: Difficulty,
    pub location: String,
    #[serde(default)]
    pub rating: f32,
}

/// Rentable gear priced per hour or per day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub category: EquipmentCategory,
    pub price_per_hour: f64,
    pub price_per_day: f64,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub rating: f32,
}

/// Anything a client can reserve
///
/// Each variant carries only its own pricing fields; callers match on it
/// instead of checking a type string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookableItem {
    Experience(Experience),
    Equipment(Equipment),
}

impl BookableItem {
    pub fn id(&self) -> &str {
        match self {
            BookableItem::Experience(e) => &e.id,
            BookableItem::Equipment(e) => &e.id,
        }
    }

    /// Title of an experience or name of a piece of equipment
    pub fn display_name(&self) -> &str {
        match self {
            BookableItem::Experience(e) => &e.title,
            BookableItem::Equipment(e) => &e.name,
        }
    }

    pub fn kind(&self) -> BookingKind {
        match self {
            BookableItem::Experience(_) => BookingKind::Experience,
            BookableItem::Equipment(_) => BookingKind::Equipment,
        }
    }

    /// Participant cap; equipment has none
    pub fn max_participants(&self) -> Option<u32> {
        match self {
            BookableItem::Experience(e) => Some(e.max_participants),
            BookableItem::Equipment(_) => None,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            BookableItem::Experience(e) => e.category.as_str(),
            BookableItem::Equipment(e) => e.category.as_str(),
        }
    }

    pub fn rating(&self) -> f32 {
        match self {
            BookableItem::Experience(e) => e.rating,
            BookableItem::Equipment(e) => e.rating,
        }
    }

    /// Headline price: per participant, or the hourly rate
    pub fn base_price(&self) -> f64 {
        match self {
            BookableItem::Experience(e) => e.price_per_participant,
            BookableItem::Equipment(e) => e.price_per_hour,
        }
    }
}

impl From<Experience> for BookableItem {
    fn from(e: Experience) -> Self {
        BookableItem::Experience(e)
    }
}

impl From<Equipment> for BookableItem {
    fn from(e: Equipment) -> Self {
        BookableItem::Equipment(e)
    }
}

/// Which form a booking uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    Experience,
    Equipment,
}

impl BookingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingKind::Experience => "experience",
            BookingKind::Equipment => "equipment",
        }
    }
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(BookingKind::Experience),
            "equipment" => Ok(BookingKind::Equipment),
            other => anyhow::bail!("unknown booking type: {other}"),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn surf_lesson() -> BookableItem {
        BookableItem::Experience(Experience {
            id: "exp-1".to_string(),
            title: "Beginner surf lesson".to_string(),
            category: ExperienceCategory::Surfing,
            duration: 120,
            max_participants: 6,
            price_per_participant: 45.0,
            difficulty: Difficulty::Beginner,
            location: "Playa de Zarautz".to_string(),
            rating: 4.8,
        })
    }

    pub fn kayak(per_hour: f64, per_day: f64) -> BookableItem {
        BookableItem::Equipment(Equipment {
            id: "eq-1".to_string(),
            name: "Sit-on-top kayak".to_string(),
            category: EquipmentCategory::Kayak,
            price_per_hour: per_hour,
            price_per_day: per_day,
            condition: Condition::Excellent,
            rating: 4.5,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(surf_lesson().kind(), BookingKind::Experience);
        assert_eq!(kayak(10.0, 60.0).kind(), BookingKind::Equipment);
    }

    #[test]
    fn test_max_participants_only_for_experiences() {
        assert_eq!(surf_lesson().max_participants(), Some(6));
        assert_eq!(kayak(10.0, 60.0).max_participants(), None);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("equipment".parse::<BookingKind>().unwrap(), BookingKind::Equipment);
        assert!("boat".parse::<BookingKind>().is_err());
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_value(kayak(10.0, 60.0)).unwrap();
        assert_eq!(json["type"], "equipment");
        assert_eq!(json["price_per_hour"], 10.0);
        assert!(json.get("max_participants").is_none());
    }
}
