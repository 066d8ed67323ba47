//! Fixed catalogue served by the mock, in upstream wire format.
//!
//! Records deliberately keep upstream's quirks: `""` for missing text,
//! numbers sent as strings, `null` nested collections and placeholder text
//! in authority-link fields.

use serde_json::{json, Value};

pub fn departments() -> Value {
    json!({
        "departments": [
            {"departmentId": 1, "displayName": "American Decorative Arts"},
            {"departmentId": 6, "displayName": "Asian Art"},
            {"departmentId": 11, "displayName": "European Paintings"},
            {"departmentId": 21, "displayName": "Modern Art"}
        ]
    })
}

/// Department id for each object, as upstream's department filter sees it.
pub fn department_of(object_id: u64) -> u32 {
    match object_id {
        1 => 1,
        45734 => 6,
        _ => 11,
    }
}

pub fn objects() -> Vec<Value> {
    vec![quail_and_millet(), wheat_field(), gold_coin()]
}

fn quail_and_millet() -> Value {
    json!({
        "objectID": 45734,
        "isHighlight": false,
        "accessionNumber": "36.100.45",
        "accessionYear": "1936",
        "isPublicDomain": true,
        "primaryImage": "https://images.metmuseum.org/CRDImages/as/original/DP251139.jpg",
        "primaryImageSmall": "https://images.metmuseum.org/CRDImages/as/web-large/DP251139.jpg",
        "additionalImages": [
            "https://images.metmuseum.org/CRDImages/as/original/DP251138.jpg",
            "https://images.metmuseum.org/CRDImages/as/original/DP251120.jpg"
        ],
        "constituents": [{
            "constituentID": 11986,
            "role": "Artist",
            "name": "Kiyohara Yukinobu",
            "constituentULAN_URL": "http://vocab.getty.edu/page/ulan/500034433",
            "constituentWikidata_URL": "https://www.wikidata.org/wiki/Q11560527",
            "gender": "Female"
        }],
        "department": "Asian Art",
        "objectName": "Hanging scroll",
        "title": "Quail and Millet",
        "culture": "Japan",
        "period": "Edo period (1615-1868)",
        "dynasty": "",
        "reign": "",
        "portfolio": "",
        "artistRole": "Artist",
        "artistPrefix": "",
        "artistDisplayName": "Kiyohara Yukinobu",
        "artistDisplayBio": "Japanese, 1643-1682",
        "artistSuffix": "",
        "artistAlphaSort": "Kiyohara Yukinobu",
        "artistNationality": "Japanese",
        "artistBeginDate": "1643",
        "artistEndDate": "1682",
        "artistGender": "Female",
        "artistWikidata_URL": "https://www.wikidata.org/wiki/Q11560527",
        "artistULAN_URL": "http://vocab.getty.edu/page/ulan/500034433",
        "objectDate": "late 17th century",
        "objectBeginDate": 1667,
        "objectEndDate": 1682,
        "medium": "Hanging scroll; ink and color on silk",
        "dimensions": "46 5/8 x 18 3/4 in. (118.4 x 47.6 cm)",
        "measurements": [{
            "elementName": "Overall",
            "elementDescription": null,
            "elementMeasurements": {"Height": 118.4, "Width": 47.6}
        }],
        "creditLine": "The Howard Mansfield Collection, Purchase, Rogers Fund, 1936",
        "geographyType": "",
        "city": "",
        "state": "",
        "county": "",
        "country": "",
        "region": "",
        "subregion": "",
        "locale": "",
        "locus": "",
        "excavation": "",
        "river": "",
        "classification": "Paintings",
        "rightsAndReproduction": "",
        "linkResource": "",
        "metadataDate": "2020-09-14T12:26:37.48Z",
        "repository": "Metropolitan Museum of Art, New York, NY",
        "objectURL": "https://www.metmuseum.org/art/collection/search/45734",
        "tags": [{
            "term": "Birds",
            "AAT_URL": "http://vocab.getty.edu/page/aat/300266506",
            "Wikidata_URL": "https://www.wikidata.org/wiki/Q5113"
        }],
        "objectWikidata_URL": "https://www.wikidata.org/wiki/Q29910832",
        "isTimelineWork": false,
        "GalleryNumber": ""
    })
}

fn wheat_field() -> Value {
    json!({
        "objectID": 436535,
        "isHighlight": true,
        "accessionNumber": "1993.132",
        "accessionYear": 1993,
        "isPublicDomain": true,
        "primaryImage": "https://images.metmuseum.org/CRDImages/ep/original/DT1567.jpg",
        "primaryImageSmall": "https://images.metmuseum.org/CRDImages/ep/web-large/DT1567.jpg",
        "additionalImages": [],
        "constituents": [{
            "constituentID": 161877,
            "role": "Artist",
            "name": "Vincent van Gogh",
            "constituentULAN_URL": "http://vocab.getty.edu/page/ulan/500115588",
            "constituentWikidata_URL": "https://www.wikidata.org/wiki/Q5582",
            "gender": ""
        }],
        "department": "European Paintings",
        "objectName": "Painting",
        "title": "Wheat Field with Cypresses",
        "culture": "",
        "period": "",
        "dynasty": "",
        "reign": "",
        "portfolio": "",
        "artistRole": "Artist",
        "artistPrefix": "",
        "artistDisplayName": "Vincent van Gogh",
        "artistDisplayBio": "Dutch, Zundert 1853-1890 Auvers-sur-Oise",
        "artistSuffix": "",
        "artistAlphaSort": "Gogh, Vincent van",
        "artistNationality": "Dutch",
        "artistBeginDate": 1853,
        "artistEndDate": 1890,
        "artistGender": "",
        "artistWikidata_URL": "https://www.wikidata.org/wiki/Q5582",
        "artistULAN_URL": "http://vocab.getty.edu/page/ulan/500115588",
        "objectDate": "1889",
        "objectBeginDate": "1889",
        "objectEndDate": "1889",
        "medium": "Oil on canvas",
        "dimensions": "28 7/8 x 36 3/4 in. (73.2 x 93.4 cm)",
        "dimensionsParsed": [
            {"element": "Overall", "dimensionType": "Height", "dimension": 73.2},
            {"element": "Overall", "dimensionType": "Width", "dimension": "93.4"}
        ],
        "measurements": [{
            "elementName": "Overall",
            "elementDescription": "",
            "elementMeasurements": {"Height": "73.2", "Width": 93.4}
        }],
        "creditLine": "Purchase, The Annenberg Foundation Gift, 1993",
        "geographyType": "",
        "city": "Saint-Remy",
        "state": "",
        "county": "",
        "country": "France",
        "region": "",
        "subregion": "",
        "locale": "",
        "locus": "",
        "excavation": "",
        "river": "",
        "classification": "Paintings",
        "rightsAndReproduction": "",
        "linkResource": "",
        "metadataDate": "2024-03-01T04:52:12.717Z",
        "repository": "Metropolitan Museum of Art, New York, NY",
        "objectURL": "https://www.metmuseum.org/art/collection/search/436535",
        "tags": [
            {"term": "Landscapes", "AAT_URL": "http://vocab.getty.edu/page/aat/300132294", "Wikidata_URL": "https://www.wikidata.org/wiki/Q191163"},
            {"term": "Cypresses", "AAT_URL": "", "Wikidata_URL": "(not assigned)"}
        ],
        "objectWikidata_URL": "https://www.wikidata.org/wiki/Q1748936",
        "isTimelineWork": true,
        "GalleryNumber": 822
    })
}

fn gold_coin() -> Value {
    json!({
        "objectID": 1,
        "isHighlight": false,
        "accessionNumber": "1979.486.1",
        "accessionYear": "",
        "isPublicDomain": false,
        "primaryImage": "",
        "primaryImageSmall": "",
        "additionalImages": [],
        "constituents": null,
        "department": "American Decorative Arts",
        "objectName": "Coin",
        "title": "One-dollar Liberty Head Coin",
        "culture": "",
        "period": "",
        "dynasty": "",
        "reign": "",
        "portfolio": "",
        "artistRole": "",
        "artistPrefix": "",
        "artistDisplayName": "",
        "artistDisplayBio": "",
        "artistSuffix": "",
        "artistAlphaSort": "",
        "artistNationality": "",
        "artistBeginDate": "",
        "artistEndDate": "",
        "artistGender": "",
        "artistWikidata_URL": "",
        "artistULAN_URL": "",
        "objectDate": "1853",
        "objectBeginDate": 1853,
        "objectEndDate": 1853,
        "medium": "Gold",
        "dimensions": "Dimensions unavailable",
        "measurements": null,
        "creditLine": "Gift of Heinz L. Stoppelmann, 1979",
        "geographyType": "",
        "city": "",
        "state": "",
        "county": "",
        "country": "",
        "region": "",
        "subregion": "",
        "locale": "",
        "locus": "",
        "excavation": "",
        "river": "",
        "classification": "",
        "rightsAndReproduction": "",
        "linkResource": "",
        "metadataDate": "2023-02-07T04:46:51.887Z",
        "repository": "Metropolitan Museum of Art, New York, NY",
        "objectURL": "https://www.metmuseum.org/art/collection/search/1",
        "tags": null,
        "objectWikidata_URL": "",
        "isTimelineWork": false,
        "GalleryNumber": ""
    })
}
