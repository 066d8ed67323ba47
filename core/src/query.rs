//! Typed parameters for the list and search endpoints.
//!
//! Unset parameters never produce a key. Booleans are sent as the literal
//! strings `"true"`/`"false"`; multi-valued parameters are `|`-joined.

use chrono::NaiveDate;

use crate::error::ClientRequestError;

/// Filters for `GET /objects`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectsParams {
    /// Only objects whose metadata changed on or after this date.
    pub metadata_date: Option<NaiveDate>,
    /// Only objects in these departments. `Some(vec![])` is sent as an empty
    /// value, which upstream treats as "all departments".
    pub department_ids: Option<Vec<u32>>,
}

impl ListObjectsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata_date(mut self, date: NaiveDate) -> Self {
        self.metadata_date = Some(date);
        self
    }

    pub fn department_ids(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.department_ids = Some(ids.into_iter().collect());
        self
    }

    /// Query pairs, or `None` when no filter is set.
    pub fn to_query(&self) -> Option<Vec<(String, String)>> {
        let mut query = Vec::new();
        if let Some(date) = self.metadata_date {
            query.push(pair("metadataDate", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(ids) = &self.department_ids {
            let joined = ids.iter().map(u32::to_string).collect::<Vec<_>>().join("|");
            query.push(pair("departmentIds", joined));
        }
        (!query.is_empty()).then_some(query)
    }
}

/// Search terms and filters for `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: String,
    pub is_highlight: Option<bool>,
    /// Match `q` against titles only.
    pub title: Option<bool>,
    /// Match `q` against subject keyword tags only.
    pub tags: Option<bool>,
    pub department_id: Option<u32>,
    pub is_on_view: Option<bool>,
    /// Match `q` against artist name or culture only.
    pub artist_or_culture: Option<bool>,
    pub medium: Option<Vec<String>>,
    pub has_images: Option<bool>,
    pub geo_location: Option<Vec<String>>,
    /// First year of the date range; must be paired with `date_end`.
    pub date_begin: Option<i32>,
    pub date_end: Option<i32>,
}

impl SearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn is_highlight(mut self, value: bool) -> Self {
        self.is_highlight = Some(value);
        self
    }

    pub fn title(mut self, value: bool) -> Self {
        self.title = Some(value);
        self
    }

    pub fn tags(mut self, value: bool) -> Self {
        self.tags = Some(value);
        self
    }

    pub fn department_id(mut self, id: u32) -> Self {
        self.department_id = Some(id);
        self
    }

    pub fn is_on_view(mut self, value: bool) -> Self {
        self.is_on_view = Some(value);
        self
    }

    pub fn artist_or_culture(mut self, value: bool) -> Self {
        self.artist_or_culture = Some(value);
        self
    }

    pub fn medium<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.medium = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn has_images(mut self, value: bool) -> Self {
        self.has_images = Some(value);
        self
    }

    pub fn geo_location<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.geo_location = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn date_begin(mut self, year: i32) -> Self {
        self.date_begin = Some(year);
        self
    }

    pub fn date_end(mut self, year: i32) -> Self {
        self.date_end = Some(year);
        self
    }

    /// Both ends of the date range at once.
    pub fn date_range(self, begin: i32, end: i32) -> Self {
        self.date_begin(begin).date_end(end)
    }

    /// Query pairs in wire order.
    ///
    /// # Errors
    /// Fails when only one of `date_begin` / `date_end` is set.
    pub fn to_query(&self) -> Result<Vec<(String, String)>, ClientRequestError> {
        let dates = match (self.date_begin, self.date_end) {
            (Some(begin), Some(end)) => Some((begin, end)),
            (None, None) => None,
            (begin, end) => {
                return Err(ClientRequestError(format!(
                    "dateBegin and dateEnd must be given together (dateBegin: {}, dateEnd: {})",
                    describe(begin),
                    describe(end)
                )))
            }
        };

        let mut query = vec![pair("q", self.q.clone())];
        push_flag(&mut query, "isHighlight", self.is_highlight);
        push_flag(&mut query, "title", self.title);
        push_flag(&mut query, "tags", self.tags);
        push_flag(&mut query, "isOnView", self.is_on_view);
        push_flag(&mut query, "artistOrCulture", self.artist_or_culture);
        if let Some(medium) = &self.medium {
            query.push(pair("medium", medium.join("|")));
        }
        if let Some(id) = self.department_id {
            query.push(pair("departmentId", id.to_string()));
        }
        push_flag(&mut query, "hasImages", self.has_images);
        if let Some(locations) = &self.geo_location {
            query.push(pair("geoLocation", locations.join("|")));
        }
        if let Some((begin, end)) = dates {
            query.push(pair("dateBegin", begin.to_string()));
            query.push(pair("dateEnd", end.to_string()));
        }
        Ok(query)
    }
}

fn pair(key: &str, value: String) -> (String, String) {
    (key.to_string(), value)
}

fn push_flag(query: &mut Vec<(String, String)>, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        query.push(pair(key, value.to_string()));
    }
}

fn describe(year: Option<i32>) -> String {
    year.map_or_else(|| "unset".to_string(), |y| y.to_string())
}
