use std::fmt::Display;

use napi::bindgen_prelude::*;
use napi_derive::napi;
use serde_json::{json, Value};

use crate::grid::{Connectivity, Grid, Point};
use crate::heap::{HeapEntry, MinHeap};
use crate::search::{shortest_path, SearchOptions};

#[napi(object)]
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl From<Cell> for Point {
    fn from(cell: Cell) -> Self {
        Point::new(cell.x, cell.y)
    }
}

#[napi(object)]
#[derive(Debug, Default)]
pub struct GridDijkstraOptions {
    pub start: Option<Cell>,
    pub end: Option<Cell>,
    pub allow_diagonals: Option<bool>,
}

impl From<GridDijkstraOptions> for SearchOptions {
    fn from(options: GridDijkstraOptions) -> Self {
        SearchOptions {
            start: options.start.map(Point::from),
            end: options.end.map(Point::from),
            allow_diagonals: options.allow_diagonals.unwrap_or(false),
        }
    }
}

fn invalid_arg<E: Display>(err: E) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

/// Accepts either a bare number or a `{ priority, val }` node.
fn entry_from_js(elem: Value) -> Result<HeapEntry<Value>> {
    match elem {
        Value::Number(ref number) => {
            let priority = number
                .as_f64()
                .ok_or_else(|| invalid_arg(format!("Priority {number} is not representable")))?;
            Ok(HeapEntry::new(priority, elem))
        }
        Value::Object(mut node) => {
            let priority = node
                .get("priority")
                .and_then(Value::as_f64)
                .ok_or_else(|| invalid_arg("Heap node requires a numeric `priority`"))?;
            let value = node.remove("val").unwrap_or(Value::Null);
            Ok(HeapEntry::new(priority, value))
        }
        other => Err(invalid_arg(format!(
            "Expected a number or a {{ priority, val }} node, got {other}"
        ))),
    }
}

/// Numbers that are their own priority go back out bare.
fn entry_to_js(entry: &HeapEntry<Value>) -> Value {
    if entry.value.as_f64() == Some(entry.priority) {
        entry.value.clone()
    } else {
        json!({ "priority": entry.priority, "val": entry.value })
    }
}

#[napi(js_name = "MinHeap")]
pub struct JsMinHeap {
    inner: MinHeap<Value>,
}

#[napi]
impl JsMinHeap {
    #[napi(constructor)]
    pub fn new(initial: Option<Vec<Value>>) -> Result<Self> {
        let entries = initial
            .unwrap_or_default()
            .into_iter()
            .map(entry_from_js)
            .collect::<Result<Vec<_>>>()?;
        Ok(JsMinHeap {
            inner: MinHeap::from_entries(entries),
        })
    }

    #[napi]
    pub fn add(&mut self, elem: Value) -> Result<()> {
        self.inner.add(entry_from_js(elem)?);
        Ok(())
    }

    #[napi]
    pub fn peek(&self) -> Option<Value> {
        self.inner.peek().map(entry_to_js)
    }

    #[napi]
    pub fn pop(&mut self) -> Option<Value> {
        self.inner.pop().as_ref().map(entry_to_js)
    }

    #[napi]
    pub fn includes(&self, value: Value) -> bool {
        self.inner.includes(&value)
    }

    #[napi]
    pub fn remove(&mut self, value: Value) -> bool {
        self.inner.remove(&value)
    }

    #[napi(getter)]
    pub fn size(&self) -> u32 {
        u32::try_from(self.inner.len()).unwrap_or(u32::MAX)
    }

    #[napi(getter)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Returns the shortest distance through `grid`, or -1 if the end is unreachable.
#[napi]
pub fn grid_dijkstra(grid: Vec<Vec<f64>>, options: Option<GridDijkstraOptions>) -> Result<f64> {
    let grid = Grid::new(grid).map_err(invalid_arg)?;
    let options = options.map(SearchOptions::from).unwrap_or_default();
    let distance = shortest_path(&grid, &options).map_err(invalid_arg)?;
    Ok(distance.unwrap_or(-1.0))
}

#[napi]
pub fn get_neighbours(allow_diagonals: bool) -> Vec<Vec<i32>> {
    Connectivity::from_diagonals(allow_diagonals)
        .offsets()
        .iter()
        .map(|&(dx, dy)| vec![dx, dy])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_entries_round_trip_through_the_heap() {
        let mut heap = MinHeap::from_entries(
            [json!(5), json!({ "priority": 1, "val": { "x": 0 } }), json!(3)]
                .into_iter()
                .map(|elem| entry_from_js(elem).unwrap())
                .collect::<Vec<_>>(),
        );
        assert!(heap.includes(&json!({ "x": 0 })));
        assert_eq!(
            heap.pop().as_ref().map(entry_to_js),
            Some(json!({ "priority": 1.0, "val": { "x": 0 } }))
        );
        assert_eq!(heap.pop().as_ref().map(entry_to_js), Some(json!(3)));
    }

    #[test]
    fn rejects_nodes_without_priority() {
        assert!(entry_from_js(json!({ "val": 1 })).is_err());
        assert!(entry_from_js(json!("text")).is_err());
    }
}
