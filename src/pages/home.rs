use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::coloring::{EngineConfig, RunSummary};
use crate::components::coloring_canvas::ColoringCanvas;

/// Default Home Page
///
/// `?heuristic=availability|degree&colors=K` picks the run's settings.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = query.with_untracked(|q| {
		EngineConfig::from_query(q.get("heuristic").as_deref(), q.get("colors").as_deref())
	});
	let (summary, set_summary) = signal(None::<RunSummary>);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				{config
					.map(|config| {
						view! { <ColoringCanvas config=config summary=set_summary fullscreen=true /> }
					})}
				<div class="graph-overlay">
					<h1>"Graph Coloring"</h1>
					<p class="subtitle">
						"Click empty space to add a node. Click two nodes to connect them."
					</p>
					<p class="stats">
						{move || {
							summary
								.get()
								.map(|s| {
									format!(
										"{} nodes · {} edges · {} coloring failures · {}",
										s.nodes,
										s.edges,
										s.failures,
										s.heuristic,
									)
								})
								.unwrap_or_default()
						}}
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
