//! Wire format and transport for the shortest-path service.

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::error::EditorError;
use super::graph::GraphStore;
use super::selection::Selection;
use super::transform::Normalization;
use super::types::{Edge, Node, NodeId};

/// Body posted to the service. Node positions are image-normalized.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
	pub nodes: Vec<Node>,
	pub paths: Vec<Edge>,
	pub start_node: NodeId,
	pub stop_nodes: Vec<NodeId>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PathResponse {
	pub path: Vec<NodeId>,
}

/// Identifies the graph a request was built from. A response is only
/// applied while the graph generation still matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathTicket {
	pub generation: u64,
}

/// Shape the current graph and selection into a request.
pub fn build_request(
	graph: &GraphStore,
	selection: &Selection,
	normalization: Normalization,
) -> Result<PathRequest, EditorError> {
	let start_node = selection.start().ok_or(EditorError::MissingStart)?;
	if selection.stops().is_empty() {
		return Err(EditorError::MissingStops);
	}

	let nodes = graph
		.nodes()
		.iter()
		.map(|n| {
			let p = normalization.to_normalized(n.position());
			Node { id: n.id, x: p.x, y: p.y }
		})
		.collect();

	Ok(PathRequest {
		nodes,
		paths: graph.edges().to_vec(),
		start_node,
		stop_nodes: selection.stops().iter().map(|s| s.id).collect(),
	})
}

pub fn encode_request(request: &PathRequest) -> Result<String, EditorError> {
	serde_json::to_string(request).map_err(|e| EditorError::Encode(e.to_string()))
}

pub fn decode_response(body: &str) -> Result<PathResponse, EditorError> {
	serde_json::from_str(body).map_err(|e| EditorError::Decode(e.to_string()))
}

fn network(err: JsValue) -> EditorError {
	EditorError::Network(
		err.as_string()
			.unwrap_or_else(|| format!("{err:?}")),
	)
}

/// POST `request` to `url` and parse the returned path.
pub async fn fetch_path(url: &str, request: &PathRequest) -> Result<PathResponse, EditorError> {
	let body = encode_request(request)?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_mode(RequestMode::Cors);
	init.set_body(&JsValue::from_str(&body));
	let req = Request::new_with_str_and_init(url, &init).map_err(network)?;
	req.headers()
		.set("Content-Type", "application/json")
		.map_err(network)?;

	let window = web_sys::window().ok_or_else(|| EditorError::Network("no window".into()))?;
	let resp: Response = JsFuture::from(window.fetch_with_request(&req))
		.await
		.map_err(network)?
		.dyn_into()
		.map_err(network)?;
	if !resp.ok() {
		return Err(EditorError::Service {
			status: resp.status(),
		});
	}

	let text = JsFuture::from(resp.text().map_err(network)?)
		.await
		.map_err(network)?;
	let text = text
		.as_string()
		.ok_or_else(|| EditorError::Decode("response body is not text".into()))?;
	decode_response(&text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_editor::transform::BackgroundImage;
	use crate::components::graph_editor::types::Point;

	fn two_nodes() -> GraphStore {
		let mut g = GraphStore::default();
		g.add_node(Point::new(10.0, 110.0));
		g.add_node(Point::new(30.0, 150.0));
		g.add_edge(0, 1);
		g
	}

	#[test]
	fn missing_start_or_stops_is_rejected() {
		let g = two_nodes();
		let mut sel = Selection::default();
		sel.add_stop(1);
		assert_eq!(
			build_request(&g, &sel, Normalization::default()),
			Err(EditorError::MissingStart)
		);

		let mut sel = Selection::default();
		sel.set_start(0);
		assert_eq!(
			build_request(&g, &sel, Normalization::default()),
			Err(EditorError::MissingStops)
		);
	}

	#[test]
	fn positions_are_normalized() {
		let g = two_nodes();
		let mut sel = Selection::default();
		sel.set_start(0);
		sel.add_stop(1);
		// 100×100 image in a 200×300 viewport: scale 2, offset (0, 50).
		let image = BackgroundImage::fit(100.0, 100.0, 200.0, 300.0).unwrap();
		let req = build_request(&g, &sel, image.normalization()).unwrap();
		assert_eq!(req.nodes[0], Node { id: 0, x: 5.0, y: 30.0 });
		assert_eq!(req.nodes[1], Node { id: 1, x: 15.0, y: 50.0 });
		assert_eq!(req.paths, vec![Edge { from: 0, to: 1 }]);
	}

	#[test]
	fn request_uses_service_field_names() {
		let mut g = GraphStore::default();
		g.add_node(Point::new(1.0, 2.0));
		let mut sel = Selection::default();
		sel.set_start(0);
		sel.add_stop(0);
		let req = build_request(&g, &sel, Normalization::default()).unwrap();
		let json: serde_json::Value = serde_json::from_str(&encode_request(&req).unwrap()).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"nodes": [{"id": 0, "x": 1.0, "y": 2.0}],
				"paths": [],
				"startNode": 0,
				"stopNodes": [0],
			})
		);
	}

	#[test]
	fn response_decoding() {
		assert_eq!(decode_response(r#"{"path":[2,0,5]}"#).unwrap().path, vec![2, 0, 5]);
		assert!(matches!(
			decode_response(r#"{"route":[1]}"#),
			Err(EditorError::Decode(_))
		));
	}
}
