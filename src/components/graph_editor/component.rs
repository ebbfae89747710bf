use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
	CanvasRenderingContext2d, Event, File, FileReader, HtmlCanvasElement, HtmlImageElement,
	HtmlInputElement, MouseEvent, Window,
};

use super::config::EditorConfig;
use super::error::EditorError;
use super::exchange;
use super::mode::{EditorMode, Tool};
use super::render;
use super::state::EditorState;
use super::types::Point;

fn window_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Shared handles every event handler needs.
#[derive(Clone)]
struct Editor {
	state: Rc<RefCell<EditorState>>,
	image: Rc<RefCell<Option<HtmlImageElement>>>,
	timer: Rc<RefCell<Option<TimeoutHandle>>>,
	config: Rc<EditorConfig>,
	mode: RwSignal<EditorMode>,
	status: RwSignal<String>,
}

impl Editor {
	/// Run a mutation, refresh the toolbar and keep the path animation in
	/// step with whatever the mutation did to it.
	fn command(&self, f: impl FnOnce(&mut EditorState)) {
		let before = self.state.borrow().next_step();
		f(&mut self.state.borrow_mut());
		let (mode, reschedule) = {
			let state = self.state.borrow();
			(state.mode(), state.needs_reschedule(before))
		};
		self.mode.set(mode);
		if reschedule {
			self.schedule_step();
		}
	}

	fn on(self, f: impl Fn(&mut EditorState) + 'static) -> impl FnMut(MouseEvent) + 'static {
		move |_: MouseEvent| self.command(&f)
	}

	fn report(&self, err: &EditorError) {
		self.status.set(err.to_string());
	}

	/// Cancel any pending step and, if the path is not fully revealed yet,
	/// schedule the next one.
	fn schedule_step(&self) {
		if let Some(handle) = self.timer.borrow_mut().take() {
			handle.clear();
		}
		let Some(ticket) = self.state.borrow().next_step() else {
			return;
		};
		let editor = self.clone();
		let scheduled = set_timeout_with_handle(
			move || {
				editor.timer.borrow_mut().take();
				let advanced = editor.state.borrow_mut().fire_step(ticket);
				if advanced {
					editor.schedule_step();
				}
			},
			self.config.step_interval,
		);
		match scheduled {
			Ok(handle) => *self.timer.borrow_mut() = Some(handle),
			Err(err) => error!("could not schedule path step: {err:?}"),
		}
	}

	fn submit(&self) {
		let prepared = self.state.borrow().prepare_submit();
		let (ticket, request) = match prepared {
			Ok(prepared) => prepared,
			Err(err) => {
				warn!("submit rejected: {err}");
				self.report(&err);
				if let (true, Some(window)) = (err.is_validation(), web_sys::window()) {
					let _ = window.alert_with_message(&err.to_string());
				}
				return;
			}
		};

		info!(
			"requesting path from {} for {} nodes, {} edges",
			self.config.service_url,
			request.nodes.len(),
			request.paths.len()
		);
		self.status.set("Waiting for path service…".into());
		let editor = self.clone();
		spawn_local(async move {
			let outcome = exchange::fetch_path(&editor.config.service_url, &request)
				.await
				.and_then(|resp| editor.state.borrow_mut().apply_path(ticket, resp));
			match outcome {
				Ok(()) => {
					let len = editor.state.borrow().animator().path().len();
					info!("received path with {len} nodes");
					editor.status.set(format!("Path: {len} nodes"));
					editor.schedule_step();
				}
				Err(err) => {
					error!("path request failed: {err}");
					editor.report(&err);
				}
			}
		});
	}

	fn load_image(&self, file: File) -> Result<(), JsValue> {
		let reader = FileReader::new()?;
		let img = HtmlImageElement::new()?;
		let (editor, reader_done) = (self.clone(), reader.clone());

		let onloadend = Closure::once_into_js(move || {
			let Some(url) = reader_done.result().ok().and_then(|r| r.as_string()) else {
				warn!("image file could not be read");
				return;
			};
			let decoded = img.clone();
			let onload = Closure::once_into_js(move || {
				let (w, h) = (
					decoded.natural_width() as f64,
					decoded.natural_height() as f64,
				);
				editor.command(|s| match s.set_background(w, h) {
					Some(bg) => info!("background {w}x{h} fitted at scale {:.3}", bg.scale),
					None => warn!("ignoring empty background image"),
				});
				*editor.image.borrow_mut() = Some(decoded);
			});
			img.set_onload(Some(onload.unchecked_ref()));
			img.set_src(&url);
		});
		reader.set_onloadend(Some(onloadend.unchecked_ref()));
		reader.read_as_data_url(&file)
	}
}

#[component]
pub fn GraphEditor(#[prop(default = EditorConfig::default())] config: EditorConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let (width, height) = web_sys::window()
		.map(|w| window_size(&w))
		.unwrap_or((800.0, 600.0));
	let editor = Editor {
		state: Rc::new(RefCell::new(EditorState::new(width, height, &config))),
		image: Rc::new(RefCell::new(None)),
		timer: Rc::new(RefCell::new(None)),
		config: Rc::new(config),
		mode: RwSignal::new(EditorMode::default()),
		status: RwSignal::new(String::new()),
	};
	let grid_size = RwSignal::new(0u32);
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let editor_init = editor.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		editor_init.state.borrow_mut().resize(w, h);

		let ctx: CanvasRenderingContext2d =
			match canvas.get_context("2d").ok().flatten().map(|c| c.dyn_into()) {
				Some(Ok(ctx)) => ctx,
				_ => {
					error!("canvas has no 2d context");
					return;
				}
			};

		let (state_resize, canvas_resize) = (editor_init.state.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = window_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			state_resize.borrow_mut().resize(nw, nh);
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (editor_anim, animate_inner) = (editor_init.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			render::render(
				&editor_anim.state.borrow(),
				editor_anim.image.borrow().as_ref(),
				&ctx,
				&editor_anim.config,
			);
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let editor_click = editor.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let at = Point::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		editor_click.command(|s| {
			s.pointer_down(at);
		});
	};

	let editor_image = editor.clone();
	let on_image = move |ev: Event| {
		let Some(file) = ev
			.target()
			.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
			.and_then(|input| input.files())
			.and_then(|files| files.get(0))
		else {
			return;
		};
		if let Err(err) = editor_image.load_image(file) {
			error!("could not load image: {err:?}");
		}
	};

	let on_grid_input = move |ev: Event| {
		grid_size.set(event_target_value(&ev).trim().parse().unwrap_or(0));
	};
	let editor_grid = editor.clone();
	let on_generate = move |_: MouseEvent| {
		let n = grid_size.get_untracked();
		let mut result = Ok(());
		editor_grid.command(|s| {
			result = s
				.generate_grid(n)
				.map(|lattice| info!("generated {n}x{n} grid, first id {}", lattice.first_id));
		});
		if let Err(err) = result {
			warn!("{err}");
			editor_grid.report(&err);
		}
	};
	let editor_connect = editor.clone();
	let on_connect = move |_: MouseEvent| {
		let mut result = Ok(0);
		editor_connect.command(|s| result = s.connect_grid_all());
		match result {
			Ok(count) => info!("connected grid with {count} edges"),
			Err(err) => {
				warn!("{err}");
				editor_connect.report(&err);
			}
		}
	};
	let editor_submit = editor.clone();
	let on_submit = move |_: MouseEvent| editor_submit.submit();

	let on_node_mode = editor.clone().on(|s| s.use_tool(Tool::Node));
	let on_path_mode = editor.clone().on(|s| s.use_tool(Tool::Path));
	let on_eraser = editor.clone().on(EditorState::toggle_eraser);
	let on_select_start = editor.clone().on(EditorState::begin_select_start);
	let on_select_stops = editor.clone().on(EditorState::begin_select_stops);
	let on_done_selecting = editor.clone().on(EditorState::finish_selecting);
	let on_clear_start = editor.clone().on(EditorState::clear_start);
	let on_clear_stops = editor.clone().on(EditorState::clear_stops);
	let on_clear_path = editor.clone().on(EditorState::clear_path);
	let on_clear_all = editor.clone().on(EditorState::clear_all);

	let (mode, status) = (editor.mode, editor.status);
	let max_grid_size = editor.config.max_grid_size.to_string();
	let mode_label = move || mode.get().label();
	let eraser_label = move || {
		if matches!(mode.get(), EditorMode::Erasing { .. }) {
			"Edit Mode"
		} else {
			"Eraser Mode"
		}
	};

	view! {
		<div class="graph-toolbar">
			<input type="file" accept="image/*" on:change=on_image />
			<button on:click=on_node_mode>"Node Mode"</button>
			<button on:click=on_path_mode>"Path Mode"</button>
			<button on:click=on_eraser>{eraser_label}</button>
			<button on:click=on_select_start>"Select Start Node"</button>
			<button on:click=on_select_stops>"Select Stop Nodes"</button>
			<button on:click=on_done_selecting>"Done Selecting"</button>
			<button on:click=on_clear_start>"Clear Start Node"</button>
			<button on:click=on_clear_stops>"Clear Stop Nodes"</button>
			<button on:click=on_clear_path>"Clear Path"</button>
			<button on:click=on_submit>"Submit"</button>
			<input
				type="number"
				min="0"
				max=max_grid_size
				placeholder="Grid size (n)"
				prop:value=move || grid_size.get().to_string()
				on:input=on_grid_input
			/>
			<button on:click=on_generate>"Generate Grid"</button>
			<button on:click=on_connect>"All Paths"</button>
			<button on:click=on_clear_all>"Clear All"</button>
			<span class="graph-mode">{mode_label}</span>
			<span class="graph-status">{move || status.get()}</span>
		</div>
		<canvas
			node_ref=canvas_ref
			class="graph-editor-canvas"
			on:click=on_click
			style="display: block; cursor: crosshair;"
		/>
	}
}
