use eframe::emath::{Pos2, Rect, Vec2};
use eframe::epaint::{FontFamily, FontId, Shape, Stroke, TextShape};
use egui::{Color32, Rounding};
use egui_graphs::{DisplayNode, DrawContext, NodeProps};
use petgraph::stable_graph::IndexType;
use petgraph::EdgeType;

pub(crate) trait CellRoleInfo {
    fn cell_role(&self) -> CellRole;
}

/// What a cell ended up as in the solved instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellRole {
    Source,
    Enclosed,
    Separator,
    Blocked,
    Free,
}

#[derive(Clone, Debug)]
pub(crate) struct NodeData {
    role: CellRole,
}

impl NodeData {
    pub(crate) fn new(role: CellRole) -> Self {
        Self { role }
    }
}

impl CellRoleInfo for NodeData {
    fn cell_role(&self) -> CellRole {
        self.role
    }
}

struct CellPalette;

impl CellPalette {
    const SOURCE: Color32 = Color32::from_rgb(0xF0, 0xE0, 0x70);
    const ENCLOSED: Color32 = Color32::from_rgb(0xBD, 0x97, 0x4A);
    const SEPARATOR: Color32 = Color32::from_rgb(0xBC, 0xBC, 0xBC);
    const BLOCKED: Color32 = Color32::from_rgb(0x06, 0x2F, 0x48);
    const FREE: Color32 = Color32::from_rgb(0x1B, 0x6B, 0x3A);

    fn color_of(role: CellRole) -> Color32 {
        match role {
            CellRole::Source => Self::SOURCE,
            CellRole::Enclosed => Self::ENCLOSED,
            CellRole::Separator => Self::SEPARATOR,
            CellRole::Blocked => Self::BLOCKED,
            CellRole::Free => Self::FREE,
        }
    }
}

/// Square cell marker with the role color, labelled when selected.
#[derive(Clone)]
pub(crate) struct CellNodeShape {
    pos: Pos2,
    label_text: String,
    selected: bool,
    dragged: bool,

    half_extent: f32,
    role: CellRole,
}

impl<N: Clone + CellRoleInfo> From<NodeProps<N>> for CellNodeShape {
    fn from(node_props: NodeProps<N>) -> Self {
        Self {
            pos: node_props.location,
            label_text: node_props.label.to_string(),
            selected: node_props.selected,
            dragged: node_props.dragged,
            half_extent: 5.0,
            role: node_props.payload.cell_role(),
        }
    }
}

impl<N: Clone + CellRoleInfo, E: Clone, Ty: EdgeType, Ix: IndexType> DisplayNode<N, E, Ty, Ix>
    for CellNodeShape
{
    fn closest_boundary_point(&self, dir: Vec2) -> Pos2 {
        closest_point_on_square(self.pos, self.half_extent, dir)
    }

    fn shapes(&mut self, ctx: &DrawContext) -> Vec<Shape> {
        let mut res = Vec::with_capacity(3);

        let is_interacted = self.selected || self.dragged;

        let center = ctx.meta.canvas_to_screen_pos(self.pos);
        let half_extent = ctx.meta.canvas_to_screen_size(self.half_extent);
        let rect = Rect::from_center_size(center, Vec2::splat(2. * half_extent));
        res.push(Shape::rect_filled(
            rect,
            Rounding::ZERO,
            CellPalette::color_of(self.role),
        ));

        if is_interacted {
            let outline = ctx.ctx.style().visuals.widgets.active.fg_stroke.color;
            res.push(Shape::rect_stroke(
                rect,
                Rounding::ZERO,
                Stroke::new(half_extent * 0.2, outline),
            ));

            let galley = ctx.ctx.fonts(|f| {
                f.layout_no_wrap(
                    self.label_text.clone(),
                    FontId::new(half_extent, FontFamily::Monospace),
                    Color32::BLACK,
                )
            });

            // display label in the middle of the square
            let label_pos = Pos2::new(
                center.x - galley.size().x / 2.,
                center.y - galley.size().y / 2.,
            );
            res.push(TextShape::new(label_pos, galley, Color32::BLACK).into());
        }

        res
    }

    fn update(&mut self, state: &NodeProps<N>) {
        self.pos = state.location;
        self.label_text = state.label.to_string();
        self.selected = state.selected;
        self.dragged = state.dragged;
        self.role = state.payload.cell_role();
    }

    fn is_inside(&self, pos: Pos2) -> bool {
        Rect::from_center_size(self.pos, Vec2::splat(2. * self.half_extent)).contains(pos)
    }
}

fn closest_point_on_square(center: Pos2, half_extent: f32, dir: Vec2) -> Pos2 {
    let direction = dir.normalized();
    let dominant = direction.x.abs().max(direction.y.abs()).max(f32::EPSILON);
    center + direction * (half_extent / dominant)
}
