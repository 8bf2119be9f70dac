//! Hyperlinks attached to a policy (`"links": [{"href", "rel"}]`).

use core::fmt;
use core::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};
use crate::fields::Fields;
use crate::options::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    #[serde(rename = "self")]
    SelfLink,
    Bookmark,
    Describedby,
    Alternate,
    Next,
    Previous,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::SelfLink => "self",
            Relation::Bookmark => "bookmark",
            Relation::Describedby => "describedby",
            Relation::Alternate => "alternate",
            Relation::Next => "next",
            Relation::Previous => "previous",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRelation(pub String);

impl fmt::Display for UnknownRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown link relation {:?}", self.0)
    }
}

impl core::error::Error for UnknownRelation {}

impl FromStr for Relation {
    type Err = UnknownRelation;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "self" => Ok(Relation::SelfLink),
            "bookmark" => Ok(Relation::Bookmark),
            "describedby" => Ok(Relation::Describedby),
            "alternate" => Ok(Relation::Alternate),
            "next" => Ok(Relation::Next),
            "previous" => Ok(Relation::Previous),
            other => Err(UnknownRelation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    href: Url,
    #[serde(rename = "rel")]
    relation: Relation,
}

impl Link {
    pub fn new(href: Url, relation: Relation) -> Self {
        Self { href, relation }
    }

    pub fn href(&self) -> &Url {
        &self.href
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }
}

pub(crate) fn parse_links(fields: Fields<'_>, options: &Options) -> Result<Vec<Link>> {
    let items = fields.opt_array("links")?;
    let mut links = Vec::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        links.push(parse_link(fields, pos, item, options)?);
    }
    Ok(links)
}

fn parse_link(fields: Fields<'_>, pos: usize, item: &Value, options: &Options) -> Result<Link> {
    let field = |name: &str| format!("links[{pos}].{name}");
    let map = item
        .as_object()
        .ok_or_else(|| fields.invalid(&format!("links[{pos}]"), "a mapping"))?;
    let link = Fields::new(fields.index(), map);

    let href = link
        .get("href")
        .ok_or_else(|| Error::MissingField {
            index: fields.index(),
            field: field("href"),
        })?
        .as_str()
        .ok_or_else(|| fields.invalid(&field("href"), "a string"))?;
    let rel = link
        .get("rel")
        .ok_or_else(|| Error::MissingField {
            index: fields.index(),
            field: field("rel"),
        })?
        .as_str()
        .ok_or_else(|| fields.invalid(&field("rel"), "a string"))?;

    let href = Url::options()
        .base_url(options.base_url.as_ref())
        .parse(href)
        .map_err(|source| Error::MalformedUri {
            index: fields.index(),
            link: pos,
            href: href.to_string(),
            source,
        })?;
    let relation = rel.parse::<Relation>().map_err(|UnknownRelation(value)| Error::UnknownRelation {
        index: fields.index(),
        link: pos,
        value,
    })?;

    Ok(Link { href, relation })
}
