// Copyright 2018 The GeoRust Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversions into the types of the `geojson` crate.

use geojson::{GeoJson, Position, Value as GeoJsonGeomValue};

use crate::json::{JsonObject, JsonValue};
use crate::{Feature, FeatureCollection, Geometry, LineString, Member, Point, Polygon, Value};

fn make_pt(pt: &Point) -> Position {
    pt.to_vec()
}

fn make_line(line: &[Point]) -> Vec<Position> {
    line.iter().map(make_pt).collect()
}

fn make_rings(rings: &[LineString]) -> Vec<Vec<Position>> {
    rings.iter().map(|ring| make_line(ring)).collect()
}

fn make_polygons(polygons: &[Polygon]) -> Vec<Vec<Vec<Position>>> {
    polygons.iter().map(|rings| make_rings(rings)).collect()
}

impl<'a> From<&'a Value> for GeoJsonGeomValue {
    fn from(value: &'a Value) -> Self {
        match *value {
            Value::Point(ref pt) => GeoJsonGeomValue::Point(make_pt(pt)),
            Value::MultiPoint(ref pts) => GeoJsonGeomValue::MultiPoint(make_line(pts)),
            Value::LineString(ref line) => GeoJsonGeomValue::LineString(make_line(line)),
            Value::MultiLineString(ref lines) => GeoJsonGeomValue::MultiLineString(make_rings(lines)),
            Value::Polygon(ref rings) => GeoJsonGeomValue::Polygon(make_rings(rings)),
            Value::MultiPolygon(ref polygons) => GeoJsonGeomValue::MultiPolygon(make_polygons(polygons)),
            Value::GeometryCollection(ref geometries) => {
                GeoJsonGeomValue::GeometryCollection(geometries.iter().map(geojson::Geometry::from).collect())
            }
        }
    }
}

impl<'a> From<&'a Geometry> for geojson::Geometry {
    fn from(geometry: &'a Geometry) -> Self {
        geojson::Geometry::new(GeoJsonGeomValue::from(&geometry.value))
    }
}

impl<'a> From<&'a Feature> for geojson::Feature {
    fn from(feature: &'a Feature) -> Self {
        let properties: JsonObject = feature
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
            .collect();
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&feature.geometry)),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl<'a> From<&'a FeatureCollection> for geojson::FeatureCollection {
    fn from(collection: &'a FeatureCollection) -> Self {
        geojson::FeatureCollection {
            bbox: None,
            features: collection.features.iter().map(geojson::Feature::from).collect(),
            foreign_members: None,
        }
    }
}

impl<'a> From<&'a Member> for GeoJson {
    fn from(member: &'a Member) -> Self {
        match *member {
            Member::Geometry(ref g) => GeoJson::Geometry(g.into()),
            Member::Feature(ref f) => GeoJson::Feature(f.into()),
            Member::FeatureCollection(ref fc) => GeoJson::FeatureCollection(fc.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use geojson::GeoJson;

    use crate::{decode_member, Member};

    fn round_trip(input: &str) {
        let member = decode_member(input.as_bytes()).unwrap();
        let geojson = GeoJson::from(&member);
        let reparsed = decode_member(geojson.to_string().as_bytes()).unwrap();
        assert_eq!(reparsed, member);
    }

    #[test]
    fn convert_point() {
        let member = decode_member(br#"{"type":"Point","coordinates":[1.23,4.56]}"#).unwrap();
        match GeoJson::from(&member) {
            GeoJson::Geometry(g) => assert_eq!(g.value, geojson::Value::Point(vec![1.23, 4.56])),
            _ => unreachable!(),
        }
    }

    #[test]
    fn convert_feature_properties() {
        let member = decode_member(
            br#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.23,4.56]},"properties":{"name":"point:A"}}"#,
        )
        .unwrap();
        let feature = match GeoJson::from(&member) {
            GeoJson::Feature(f) => f,
            _ => unreachable!(),
        };
        assert_eq!(
            feature.properties.unwrap().get("name"),
            Some(&serde_json::Value::from("point:A"))
        );
        assert!(feature.geometry.is_some());
    }

    #[test]
    fn round_trip_through_geojson() {
        round_trip(r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3]]]}"#);
        round_trip(r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,0]]]]}"#);
        round_trip(
            r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]},{"type":"MultiPoint","coordinates":[[3,4]]}]}"#,
        );
        round_trip(
            r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]},"properties":{"id":"7"}}]}"#,
        );
    }

    #[test]
    fn member_kinds_map_to_geojson_variants() {
        let member: Member = r#"{"type":"FeatureCollection","features":[]}"#.parse().unwrap();
        assert!(matches!(GeoJson::from(&member), GeoJson::FeatureCollection(ref fc) if fc.features.is_empty()));
    }
}
