//! Interactive view of a solved grid instance. Cells are drawn as squares
//! colored by their role in the solution; the synthetic boundary vertex is
//! omitted.

pub(crate) mod node;

use eframe::{run_native, App, CreationContext};
use egui::{Context, Style, Visuals};
use egui_graphs::{DefaultEdgeShape, GraphView, SettingsInteraction, SettingsStyle};
use petgraph::prelude::StableUnGraph;
use petgraph::stable_graph::DefaultIx;
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use crate::cuts::VertexSet;
use crate::grid::GridInstance;
use crate::visualization::node::{CellNodeShape, CellRole, NodeData};

struct GraphApp {
    graph: egui_graphs::Graph<NodeData, (), Undirected, DefaultIx, CellNodeShape, DefaultEdgeShape>,
}

impl GraphApp {
    fn new(
        graph: egui_graphs::Graph<
            NodeData,
            (),
            Undirected,
            DefaultIx,
            CellNodeShape,
            DefaultEdgeShape,
        >,
        _: &CreationContext<'_>,
    ) -> Self {
        Self { graph }
    }
}

impl App for GraphApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        let settings_style = &SettingsStyle::new().with_labels_always(false);
        let interaction_settings = &SettingsInteraction::new()
            .with_dragging_enabled(true)
            .with_node_clicking_enabled(true)
            .with_node_selection_enabled(true);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(
                &mut GraphView::<_, _, _, _, CellNodeShape, DefaultEdgeShape>::new(
                    &mut self.graph,
                )
                .with_styles(settings_style)
                .with_interactions(interaction_settings),
            );
        });
    }
}

fn generate_graph(
    instance: &GridInstance,
    separator: &VertexSet,
    component: &VertexSet,
) -> egui_graphs::Graph<NodeData, (), Undirected, DefaultIx, CellNodeShape, DefaultEdgeShape> {
    let cell_count = instance.rows() * instance.cols();
    let mut g: StableUnGraph<NodeData, ()> =
        StableUnGraph::with_capacity(cell_count, instance.graph().edge_count());

    for cell in 0..cell_count {
        let role = if cell == instance.source() {
            CellRole::Source
        } else if separator.contains(cell) {
            CellRole::Separator
        } else if component.contains(cell) {
            CellRole::Enclosed
        } else if instance.is_blocked(cell) {
            CellRole::Blocked
        } else {
            CellRole::Free
        };
        g.add_node(NodeData::new(role));
    }

    // cell indices carry over; only edges into the boundary vertex are dropped
    for edge in instance.graph().edge_references() {
        let a = edge.source().index();
        let b = edge.target().index();
        if a < cell_count && b < cell_count {
            g.add_edge(
                petgraph::graph::NodeIndex::new(a),
                petgraph::graph::NodeIndex::new(b),
                (),
            );
        }
    }

    egui_graphs::Graph::from(&g)
}

/// Open a window showing the grid graph with the separator highlighted.
pub fn draw_grid(
    instance: &GridInstance,
    separator: &VertexSet,
    component: &VertexSet,
) -> eframe::Result<()> {
    let graph = generate_graph(instance, separator, component);
    let native_options = eframe::NativeOptions::default();
    run_native(
        "enclose",
        native_options,
        Box::new(move |cc| {
            // dark mode fits the cell palette
            let style = Style {
                visuals: Visuals::dark(),
                ..Style::default()
            };
            cc.egui_ctx.set_style(style);
            Box::new(GraphApp::new(graph, cc))
        }),
    )
}
