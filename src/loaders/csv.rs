use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::scene::Scene;
use crate::types::{Triangle, Vertex};

/// Scene parsing failures. Both variants are fatal: loading aborts and no
/// scene is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("line {line}: triangle references vertex {index} but only {loaded} vertices are loaded")]
    InvalidVertexReference {
        line: usize,
        index: usize,
        loaded: usize,
    },

    #[error("line {line}: malformed record `{record}`")]
    MalformedRecord { line: usize, record: String },
}

/// Loads a scene from a CSV file.
///
/// The file handle is released as soon as the contents are read, on both
/// success and failure paths.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file {:?}", path))?;
    let scene = parse_scene(&input)?;
    Ok(scene)
}

/// Parses a CSV scene listing: vertex records (`v,<x>,<y>`) followed by
/// triangle records (`t,<a>,<b>,<c>,<fill>`).
///
/// Vertices must precede any triangle that references them; input order is
/// preserved for both sequences.
pub fn parse_scene(input: &str) -> Result<Scene, LoadError> {
    let mut scene = Scene::new();

    for (i, raw) in input.lines().enumerate() {
        let line = i + 1;
        let record = raw.trim_end();
        match record.chars().next() {
            Some('v') => {
                let vertex = parse_vertex(record, line)?;
                let index = scene.add_vertex(vertex);
                log::info!("Loaded vertex {} at ({}, {})", index, vertex.x, vertex.y);
            }
            Some('t') => {
                let triangle = parse_triangle(record, line)?;
                let index = scene.add_triangle(triangle).map_err(|e| {
                    LoadError::InvalidVertexReference {
                        line,
                        index: e.index,
                        loaded: e.loaded,
                    }
                })?;
                log::info!(
                    "Loaded triangle {} with vertices [{}, {}, {}], fill '{}'",
                    index,
                    triangle.verts[0],
                    triangle.verts[1],
                    triangle.verts[2],
                    triangle.fill
                );
            }
            _ => return Err(malformed(record, line)),
        }
    }

    Ok(scene)
}

fn parse_vertex(record: &str, line: usize) -> Result<Vertex, LoadError> {
    let fields: Vec<&str> = record.split(',').collect();
    if fields.len() != 3 {
        return Err(malformed(record, line));
    }
    let x = parse_int(fields[1]).ok_or_else(|| malformed(record, line))?;
    let y = parse_int(fields[2]).ok_or_else(|| malformed(record, line))?;
    Ok(Vertex::new(x, y))
}

fn parse_triangle(record: &str, line: usize) -> Result<Triangle, LoadError> {
    let fields: Vec<&str> = record.split(',').collect();
    if fields.len() != 5 {
        return Err(malformed(record, line));
    }
    let mut verts = [0usize; 3];
    for (slot, field) in verts.iter_mut().zip(fields[1..4].iter().copied()) {
        // Indices parse as unsigned; a negative index is a malformed record
        *slot = parse_int(field).ok_or_else(|| malformed(record, line))?;
    }
    let fill = fields[4]
        .trim()
        .chars()
        .next()
        .ok_or_else(|| malformed(record, line))?;
    Ok(Triangle::new(verts, fill))
}

fn parse_int<T: std::str::FromStr>(field: &str) -> Option<T> {
    field.trim().parse().ok()
}

fn malformed(record: &str, line: usize) -> LoadError {
    LoadError::MalformedRecord {
        line,
        record: record.to_string(),
    }
}
