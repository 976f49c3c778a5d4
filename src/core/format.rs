//! Item line formatting.
//!
//! An item is printed as its tag name followed by its attributes. Items that
//! point at another definition (`id` plus a `refid` other than `Message`) use
//! the short `alias (target ("number"))` form. Every other item gets one
//! token per attribute, in document order:
//!
//! | attribute         | token                             |
//! |-------------------|-----------------------------------|
//! | `id`, `refid`     | `value ` (nothing for `Message`)  |
//! | `idnumeric`       | `("value") `                      |
//! | `oms-id`          | nothing                           |
//! | anything else     | `name ("value") `                 |

use crate::config::MESSAGE_SENTINEL;
use crate::core::layout::XmlNode;
use std::fmt::{self, Display, Formatter};

/// A resolved step definition is empty when none of its sections has items.
pub fn is_empty_step(node: &XmlNode) -> bool {
    node.children.iter().all(|section| section.children.is_empty())
}

/// One report line for an item, without indentation.
#[derive(Debug, Clone, Copy)]
pub struct ItemLine<'a>(&'a XmlNode);

impl<'a> ItemLine<'a> {
    pub fn new(item: &'a XmlNode) -> Self {
        Self(item)
    }
}

impl Display for ItemLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let item = self.0;
        write!(f, "{}: ", item.name)?;
        if let Some(reference) = CrossReference::of(item) {
            return write!(f, "{reference}");
        }
        for (name, value) in &item.attributes {
            write!(f, "{}", AttributeToken { name, value })?;
        }
        Ok(())
    }
}

struct CrossReference<'a> {
    id: &'a str,
    refid: &'a str,
    idnumeric: &'a str,
}

impl<'a> CrossReference<'a> {
    fn of(item: &'a XmlNode) -> Option<Self> {
        let id = item.attribute("id")?;
        let refid = item.attribute("refid")?;
        (refid != MESSAGE_SENTINEL).then(|| Self {
            id,
            refid,
            idnumeric: item.attribute_or_empty("idnumeric"),
        })
    }
}

impl Display for CrossReference<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} (\"{}\"))", self.id, self.refid, self.idnumeric)
    }
}

struct AttributeToken<'a> {
    name: &'a str,
    value: &'a str,
}

impl Display for AttributeToken<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = self.value;
        match self.name {
            "id" | "refid" if value == MESSAGE_SENTINEL => Ok(()),
            "id" | "refid" => write!(f, "{value} "),
            "idnumeric" => write!(f, "(\"{value}\") "),
            "oms-id" => Ok(()),
            name => write!(f, "{name} (\"{value}\") "),
        }
    }
}
