//! Catalog of selectable room designs.
//!
//! The catalog only turns a choice into a [`Proposal`]; whether the proposal
//! fits the budget is up to the [`Ledger`](crate::Ledger).
use serde::{Deserialize, Deserializer};

use crate::{EngineError, Money, Proposal, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    pub rooms: Vec<Room>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Room {
    pub name: String,
    pub designs: Vec<Design>,
}

/// A complete design for a room, sold as one item.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Design {
    pub name: String,
    #[serde(deserialize_with = "money_from_text")]
    pub price: Money,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

/// A piece that can be added on top of a design, filed under the design name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Extra {
    pub name: String,
    #[serde(deserialize_with = "money_from_text")]
    pub price: Money,
}

/// Prices in catalog files are written in rupees, either as a number
/// (`13000`) or as text (`"13000.50"`).
fn money_from_text<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Major(i64),
        Text(String),
    }

    let money = match Raw::deserialize(deserializer)? {
        Raw::Major(major) => major
            .checked_mul(100)
            .map(Money::new)
            .ok_or_else(|| serde::de::Error::custom("price too large"))?,
        Raw::Text(text) => text.parse::<Money>().map_err(serde::de::Error::custom)?,
    };
    if money.is_negative() {
        return Err(serde::de::Error::custom("price must not be negative"));
    }
    Ok(money)
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl Catalog {
    pub fn room(&self, room: &str) -> ResultEngine<&Room> {
        self.rooms
            .iter()
            .find(|r| same_name(&r.name, room))
            .ok_or_else(|| EngineError::UnknownDesign(room.to_string()))
    }

    pub fn find_design(&self, room: &str, design: &str) -> ResultEngine<&Design> {
        self.room(room)?
            .designs
            .iter()
            .find(|d| same_name(&d.name, design))
            .ok_or_else(|| EngineError::UnknownDesign(format!("{room} / {design}")))
    }

    /// One unit of a whole design, without group.
    pub fn design(&self, room: &str, design: &str) -> ResultEngine<Proposal> {
        let design = self.find_design(room, design)?;
        Ok(Proposal::new(design.name.clone(), design.price))
    }

    /// `quantity` units of an extra, grouped under its design.
    pub fn extra(
        &self,
        room: &str,
        design: &str,
        extra: &str,
        quantity: u32,
    ) -> ResultEngine<Proposal> {
        if quantity == 0 {
            return Err(EngineError::InvalidQuantity(format!(
                "no units of \"{extra}\" selected"
            )));
        }
        let found = self.find_design(room, design)?;
        let item = found
            .extras
            .iter()
            .find(|e| same_name(&e.name, extra))
            .ok_or_else(|| EngineError::UnknownDesign(format!("{room} / {design} / {extra}")))?;

        Ok(Proposal::new(item.name.clone(), item.price)
            .quantity(quantity)
            .group(found.name.clone()))
    }

    /// The rooms, designs and extras offered out of the box.
    pub fn builtin() -> Self {
        fn design(name: &str, price: i64, extras: &[(&str, i64)]) -> Design {
            Design {
                name: name.to_string(),
                price: Money::from_major(price),
                extras: extras
                    .iter()
                    .map(|(name, price)| Extra {
                        name: name.to_string(),
                        price: Money::from_major(*price),
                    })
                    .collect(),
            }
        }

        fn room(name: &str, designs: Vec<Design>) -> Room {
            Room {
                name: name.to_string(),
                designs,
            }
        }

        Catalog {
            rooms: vec![
                room(
                    "Living Room",
                    vec![
                        design(
                            "Modern Living Room",
                            13_000,
                            &[
                                ("Sofa", 3_000),
                                ("Coffee Table", 1_200),
                                ("Bookshelf", 2_000),
                                ("Armchair", 2_500),
                            ],
                        ),
                        design(
                            "Classic Living Room",
                            11_000,
                            &[
                                ("Carved Sofa Set", 3_200),
                                ("Vintage Coffee Table", 1_500),
                                ("Classic Bookshelf", 2_200),
                                ("Rocking Chair", 2_700),
                            ],
                        ),
                        design(
                            "Minimalist Living Room",
                            9_000,
                            &[
                                ("Compact Sofa", 2_500),
                                ("Simple Coffee Table", 1_000),
                                ("Wall Shelf", 1_800),
                                ("Minimalist Chair", 2_000),
                            ],
                        ),
                    ],
                ),
                room(
                    "Bedroom",
                    vec![
                        design(
                            "Modular Bedroom",
                            12_000,
                            &[
                                ("Bed Frame", 3_000),
                                ("Wardrobe", 4_500),
                                ("Nightstand", 1_200),
                                ("Desk", 1_800),
                            ],
                        ),
                        design(
                            "Compact Bedroom",
                            10_000,
                            &[
                                ("Compact Bed", 2_500),
                                ("Corner Wardrobe", 3_500),
                                ("Floating Shelf", 800),
                            ],
                        ),
                        design(
                            "Classic Bedroom",
                            8_500,
                            &[
                                ("Vintage Bed", 4_000),
                                ("Ornate Wardrobe", 5_000),
                                ("Classic Dresser", 3_000),
                            ],
                        ),
                    ],
                ),
                room(
                    "Bathroom",
                    vec![
                        design(
                            "Modern Bathroom",
                            10_000,
                            &[
                                ("Rain Shower", 3_000),
                                ("Vanity Mirror", 1_500),
                                ("Heated Towel Rail", 2_000),
                            ],
                        ),
                        design(
                            "Classic Bathroom",
                            7_500,
                            &[("Ceramic Sink", 1_200), ("Wall Cabinet", 1_700)],
                        ),
                        design(
                            "Compact Bathroom",
                            5_000,
                            &[
                                ("Corner Sink", 1_000),
                                ("Foldable Mirror", 800),
                                ("Space-Saving Shelf", 900),
                            ],
                        ),
                    ],
                ),
                room(
                    "Kitchen",
                    vec![
                        design(
                            "Modular Kitchen",
                            30_000,
                            &[
                                ("Overhead Cabinets", 5_000),
                                ("Chimney", 7_000),
                                ("Drawer Storage", 4_000),
                            ],
                        ),
                        design(
                            "Traditional Kitchen",
                            20_000,
                            &[("Wooden Cupboards", 3_500), ("Stone Countertop", 6_000)],
                        ),
                        design(
                            "Compact Kitchen",
                            15_000,
                            &[("Simple Cupboards", 2_500), ("Basic Countertop", 2_000)],
                        ),
                    ],
                ),
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
