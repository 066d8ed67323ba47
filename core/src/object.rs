//! The full object record returned by `GET /objects/{id}`.
//!
//! # Design
//! Fields fall into three tiers:
//! - always present: identifier, flags, department, accession number and
//!   the free-form object date with its begin/end years;
//! - optional scalars, where upstream's `""` reads as `None`;
//! - nested collections, each independently optional.
//!
//! Canonical types for fields whose upstream type drifts:
//! - `accessionYear`, `artistBeginDate`, `artistEndDate`, `GalleryNumber`
//!   are text (a number on the wire becomes its decimal text);
//! - `objectBeginDate`, `objectEndDate` are integer years (numeric text on
//!   the wire is parsed);
//! - measurements and parsed dimensions are floats (numeric text parsed).
//!
//! External authority links (`*_URL`, `*Wikidata_URL`) stay plain optional
//! strings; upstream's `"(not assigned)"` placeholder reads as `None`, any
//! other text is kept as sent. Image and
//! object page links are validated URLs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::normalize::{Coercion, FieldRule};
use crate::validate::{Fields, Record};

/// One museum object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectRecord {
    pub object_id: u64,
    pub is_highlight: bool,
    pub is_public_domain: bool,
    pub is_timeline_work: bool,
    pub accession_number: String,
    pub accession_year: Option<String>,
    pub department: String,

    pub primary_image: Option<Url>,
    pub primary_image_small: Option<Url>,
    pub additional_images: Vec<Url>,
    pub object_url: Option<Url>,
    pub object_wikidata_url: Option<String>,

    pub object_name: Option<String>,
    pub title: Option<String>,
    pub culture: Option<String>,
    pub period: Option<String>,
    pub dynasty: Option<String>,
    pub reign: Option<String>,
    pub portfolio: Option<String>,

    pub artist_role: Option<String>,
    pub artist_prefix: Option<String>,
    pub artist_display_name: Option<String>,
    pub artist_display_bio: Option<String>,
    pub artist_suffix: Option<String>,
    pub artist_alpha_sort: Option<String>,
    pub artist_nationality: Option<String>,
    pub artist_begin_date: Option<String>,
    pub artist_end_date: Option<String>,
    pub artist_gender: Option<String>,
    pub artist_wikidata_url: Option<String>,
    pub artist_ulan_url: Option<String>,

    pub object_date: String,
    pub object_begin_date: i64,
    pub object_end_date: i64,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub dimensions_parsed: Vec<DimensionEntry>,
    pub measurements: Option<Vec<MeasurementGroup>>,

    pub credit_line: Option<String>,
    pub geography_type: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub locale: Option<String>,
    pub locus: Option<String>,
    pub excavation: Option<String>,
    pub river: Option<String>,

    pub classification: Option<String>,
    pub rights_and_reproduction: Option<String>,
    pub link_resource: Option<String>,
    pub metadata_date: Option<DateTime<Utc>>,
    pub repository: Option<String>,
    pub gallery_number: Option<String>,

    pub constituents: Option<Vec<Constituent>>,
    pub tags: Option<Vec<Tag>>,
}

impl Record for ObjectRecord {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::exact("objectID", "object_id").coerce(Coercion::Integer),
        FieldRule::exact("isHighlight", "is_highlight"),
        FieldRule::exact("isPublicDomain", "is_public_domain"),
        FieldRule::exact("isTimelineWork", "is_timeline_work"),
        FieldRule::exact("accessionNumber", "accession_number"),
        FieldRule::optional("accessionYear", "accession_year").coerce(Coercion::Text),
        FieldRule::exact("department", "department"),
        FieldRule::optional("primaryImage", "primary_image"),
        FieldRule::optional("primaryImageSmall", "primary_image_small"),
        FieldRule::optional("additionalImages", "additional_images"),
        FieldRule::optional("objectURL", "object_url"),
        FieldRule::link("objectWikidata_URL", "object_wikidata_url"),
        FieldRule::optional("objectName", "object_name"),
        FieldRule::optional("title", "title"),
        FieldRule::optional("culture", "culture"),
        FieldRule::optional("period", "period"),
        FieldRule::optional("dynasty", "dynasty"),
        FieldRule::optional("reign", "reign"),
        FieldRule::optional("portfolio", "portfolio"),
        FieldRule::optional("artistRole", "artist_role"),
        FieldRule::optional("artistPrefix", "artist_prefix"),
        FieldRule::optional("artistDisplayName", "artist_display_name"),
        FieldRule::optional("artistDisplayBio", "artist_display_bio"),
        FieldRule::optional("artistSuffix", "artist_suffix"),
        FieldRule::optional("artistAlphaSort", "artist_alpha_sort"),
        FieldRule::optional("artistNationality", "artist_nationality"),
        FieldRule::optional("artistBeginDate", "artist_begin_date").coerce(Coercion::Text),
        FieldRule::optional("artistEndDate", "artist_end_date").coerce(Coercion::Text),
        FieldRule::optional("artistGender", "artist_gender"),
        FieldRule::link("artistWikidata_URL", "artist_wikidata_url"),
        FieldRule::link("artistULAN_URL", "artist_ulan_url"),
        FieldRule::exact("objectDate", "object_date"),
        FieldRule::exact("objectBeginDate", "object_begin_date").coerce(Coercion::Integer),
        FieldRule::exact("objectEndDate", "object_end_date").coerce(Coercion::Integer),
        FieldRule::optional("medium", "medium"),
        FieldRule::optional("dimensions", "dimensions"),
        FieldRule::optional("dimensionsParsed", "dimensions_parsed"),
        FieldRule::optional("measurements", "measurements"),
        FieldRule::optional("creditLine", "credit_line"),
        FieldRule::optional("geographyType", "geography_type"),
        FieldRule::optional("city", "city"),
        FieldRule::optional("state", "state"),
        FieldRule::optional("county", "county"),
        FieldRule::optional("country", "country"),
        FieldRule::optional("region", "region"),
        FieldRule::optional("subregion", "subregion"),
        FieldRule::optional("locale", "locale"),
        FieldRule::optional("locus", "locus"),
        FieldRule::optional("excavation", "excavation"),
        FieldRule::optional("river", "river"),
        FieldRule::optional("classification", "classification"),
        FieldRule::optional("rightsAndReproduction", "rights_and_reproduction"),
        FieldRule::optional("linkResource", "link_resource"),
        FieldRule::optional("metadataDate", "metadata_date"),
        FieldRule::optional("repository", "repository"),
        FieldRule::optional("GalleryNumber", "gallery_number").coerce(Coercion::Text),
        FieldRule::optional("constituents", "constituents"),
        FieldRule::optional("tags", "tags"),
    ];

    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            object_id: f.id("object_id"),
            is_highlight: f.bool("is_highlight"),
            is_public_domain: f.bool("is_public_domain"),
            is_timeline_work: f.bool("is_timeline_work"),
            accession_number: f.string("accession_number"),
            accession_year: f.opt_string("accession_year"),
            department: f.string("department"),
            primary_image: f.opt_url("primary_image"),
            primary_image_small: f.opt_url("primary_image_small"),
            additional_images: f.url_list("additional_images"),
            object_url: f.opt_url("object_url"),
            object_wikidata_url: f.opt_string("object_wikidata_url"),
            object_name: f.opt_string("object_name"),
            title: f.opt_string("title"),
            culture: f.opt_string("culture"),
            period: f.opt_string("period"),
            dynasty: f.opt_string("dynasty"),
            reign: f.opt_string("reign"),
            portfolio: f.opt_string("portfolio"),
            artist_role: f.opt_string("artist_role"),
            artist_prefix: f.opt_string("artist_prefix"),
            artist_display_name: f.opt_string("artist_display_name"),
            artist_display_bio: f.opt_string("artist_display_bio"),
            artist_suffix: f.opt_string("artist_suffix"),
            artist_alpha_sort: f.opt_string("artist_alpha_sort"),
            artist_nationality: f.opt_string("artist_nationality"),
            artist_begin_date: f.opt_string("artist_begin_date"),
            artist_end_date: f.opt_string("artist_end_date"),
            artist_gender: f.opt_string("artist_gender"),
            artist_wikidata_url: f.opt_string("artist_wikidata_url"),
            artist_ulan_url: f.opt_string("artist_ulan_url"),
            object_date: f.string("object_date"),
            object_begin_date: f.int("object_begin_date"),
            object_end_date: f.int("object_end_date"),
            medium: f.opt_string("medium"),
            dimensions: f.opt_string("dimensions"),
            dimensions_parsed: f.opt_records("dimensions_parsed").unwrap_or_default(),
            measurements: f.opt_records("measurements"),
            credit_line: f.opt_string("credit_line"),
            geography_type: f.opt_string("geography_type"),
            city: f.opt_string("city"),
            state: f.opt_string("state"),
            county: f.opt_string("county"),
            country: f.opt_string("country"),
            region: f.opt_string("region"),
            subregion: f.opt_string("subregion"),
            locale: f.opt_string("locale"),
            locus: f.opt_string("locus"),
            excavation: f.opt_string("excavation"),
            river: f.opt_string("river"),
            classification: f.opt_string("classification"),
            rights_and_reproduction: f.opt_string("rights_and_reproduction"),
            link_resource: f.opt_string("link_resource"),
            metadata_date: f.opt_timestamp("metadata_date"),
            repository: f.opt_string("repository"),
            gallery_number: f.opt_string("gallery_number"),
            constituents: f.opt_records("constituents"),
            tags: f.opt_records("tags"),
        }
    }
}

/// An artist or other contributor credited on an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constituent {
    pub constituent_id: u64,
    pub role: String,
    pub name: String,
    pub ulan_url: Option<String>,
    pub wikidata_url: Option<String>,
    pub gender: Option<String>,
}

impl Record for Constituent {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::exact("constituentID", "constituent_id").coerce(Coercion::Integer),
        FieldRule::exact("role", "role"),
        FieldRule::exact("name", "name"),
        FieldRule::link("constituentULAN_URL", "ulan_url"),
        FieldRule::link("constituentWikidata_URL", "wikidata_url"),
        FieldRule::optional("gender", "gender"),
    ];

    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            constituent_id: f.id("constituent_id"),
            role: f.string("role"),
            name: f.string("name"),
            ulan_url: f.opt_string("ulan_url"),
            wikidata_url: f.opt_string("wikidata_url"),
            gender: f.opt_string("gender"),
        }
    }
}

/// A subject keyword with optional authority links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub term: String,
    pub aat_url: Option<String>,
    pub wikidata_url: Option<String>,
}

impl Record for Tag {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::exact("term", "term"),
        FieldRule::link("AAT_URL", "aat_url"),
        FieldRule::link("Wikidata_URL", "wikidata_url"),
    ];

    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            term: f.string("term"),
            aat_url: f.opt_string("aat_url"),
            wikidata_url: f.opt_string("wikidata_url"),
        }
    }
}

/// A named part of an object with its physical measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementGroup {
    pub element_name: String,
    pub element_description: Option<String>,
    pub element_measurements: Measurements,
}

impl Record for MeasurementGroup {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::exact("elementName", "element_name"),
        FieldRule::optional("elementDescription", "element_description"),
        FieldRule::exact("elementMeasurements", "element_measurements"),
    ];

    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            element_name: f.string("element_name"),
            element_description: f.opt_string("element_description"),
            element_measurements: f.record("element_measurements"),
        }
    }
}

/// Measurements in centimetres; each axis is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Measurements {
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub diameter: Option<f64>,
}

impl Record for Measurements {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::optional("Height", "height").coerce(Coercion::Float),
        FieldRule::optional("Width", "width").coerce(Coercion::Float),
        FieldRule::optional("Depth", "depth").coerce(Coercion::Float),
        FieldRule::optional("Diameter", "diameter").coerce(Coercion::Float),
    ];

    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            height: f.opt_float("height"),
            width: f.opt_float("width"),
            depth: f.opt_float("depth"),
            diameter: f.opt_float("diameter"),
        }
    }
}

/// One structured dimension, e.g. element `"Overall"`, type `"Height"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionEntry {
    pub element: String,
    pub dimension_type: String,
    pub dimension: f64,
}

impl Record for DimensionEntry {
    const FIELDS: &'static [FieldRule] = &[
        FieldRule::exact("element", "element"),
        FieldRule::exact("dimensionType", "dimension_type"),
        FieldRule::exact("dimension", "dimension").coerce(Coercion::Float),
    ];

    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            element: f.string("element"),
            dimension_type: f.string("dimension_type"),
            dimension: f.float("dimension"),
        }
    }
}
