//! Shared fixtures for the mapping integration tests

#![allow(dead_code)]

use remap_core::{
    CustomMapper, ExportAll, FlatMap, Instance, Instantiator, Mapper, RecordFill, Registry,
    Result, Target,
};
use serde_json::{json, Value};
use std::any::Any;
use std::sync::Arc;

/// Plain target with two declared fields.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Airport {
    pub code: Option<String>,
    pub city: Option<String>,
}

impl Target for Airport {
    fn declares_field(&self, name: &str) -> bool {
        matches!(name, "code" | "city")
    }

    fn set_field(&mut self, name: &str, value: Value) {
        let text = value.as_str().map(str::to_string);
        match name {
            "code" => self.code = text,
            "city" => self.city = text,
            _ => {}
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Record-like target: takes the whole attribute map at once.
#[derive(Debug, Default)]
pub struct AirportRecord {
    pub attributes: FlatMap,
}

impl RecordFill for AirportRecord {
    fn fill_from(&mut self, attributes: &FlatMap) {
        self.attributes = attributes.clone();
    }
}

impl Target for AirportRecord {
    fn declares_field(&self, _name: &str) -> bool {
        // Never consulted: the record-fill path bypasses field checks.
        false
    }

    fn set_field(&mut self, _name: &str, _value: Value) {
        panic!("record targets are filled in bulk, never field by field");
    }

    fn record_fill(&mut self) -> Option<&mut dyn RecordFill> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Release metadata another target depends on at construction time.
#[derive(Debug, Clone)]
pub struct Release {
    pub number: i64,
}

impl Target for Release {
    fn declares_field(&self, name: &str) -> bool {
        name == "number"
    }

    fn set_field(&mut self, name: &str, value: Value) {
        if name == "number" {
            self.number = value.as_i64().unwrap_or_default();
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Target whose constructor resolves a dependency and pre-sets `version`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VersionedAirport {
    pub code: Option<String>,
    pub city: Option<String>,
    pub version: Option<i64>,
}

impl Target for VersionedAirport {
    fn declares_field(&self, name: &str) -> bool {
        matches!(name, "code" | "city" | "version")
    }

    fn set_field(&mut self, name: &str, value: Value) {
        match name {
            "code" => self.code = value.as_str().map(str::to_string),
            "city" => self.city = value.as_str().map(str::to_string),
            "version" => self.version = value.as_i64(),
            _ => {}
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Named custom mapper that ignores the item and produces canned values.
pub struct CannedMapper;

impl CustomMapper for CannedMapper {
    fn map(&self, _item: &Value, _target_type: &str) -> Result<Box<dyn Target>> {
        Ok(Box::new(Airport {
            code: Some("custom-mapped".to_string()),
            city: Some("custom-mapped".to_string()),
        }))
    }
}

/// Structured payload stub standing in for a web request.
pub struct FakeRequest {
    pub params: Vec<(&'static str, &'static str)>,
}

impl ExportAll for FakeRequest {
    fn export_all(&self) -> FlatMap {
        self.params
            .iter()
            .map(|(key, value)| (key.to_string(), json!(value)))
            .collect()
    }
}

/// Registry with every fixture type registered.
pub fn registry() -> Arc<Registry> {
    let mut registry = Registry::new();
    registry.register_target("Airport", |_| Ok(Airport::default()));
    registry.register_target("AirportRecord", |_| Ok(AirportRecord::default()));
    registry.register_target("Release", |_| Ok(Release { number: 1 }));
    registry.register_target("VersionedAirport", |registry| {
        let release = match registry.construct("Release")? {
            Instance::Target(target) => target.downcast_ref::<Release>().cloned(),
            Instance::Mapper(_) => None,
        };
        Ok(VersionedAirport {
            version: release.map(|release| release.number),
            ..VersionedAirport::default()
        })
    });
    registry.register_mapper("CannedMapper", |_| Ok(CannedMapper));
    Arc::new(registry)
}

pub fn airport_mapper(source: impl Into<remap_core::Source>) -> Mapper {
    Mapper::with_instantiator(source, registry())
}

pub fn airport_map(code: &str, city: &str) -> FlatMap {
    let mut map = FlatMap::new();
    map.insert("code".to_string(), json!(code));
    map.insert("city".to_string(), json!(city));
    map
}
