//! Layout pass over the host view tree.
//!
//! The tree is mirrored into a fresh [`TaffyTree`] on every pass. Leaves are
//! measured from their widget content; containers size from their children.

use peniko::kurbo::{Point, Rect};
use taffy::{
    TaffyError, TaffyTree,
    geometry::Size,
    style::{AvailableSpace, Dimension},
    tree::NodeId,
};

use crate::ViewId;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout engine failure: {0}")]
    Taffy(#[from] TaffyError),
}

/// Lay out the tree under `root` within `available_width`, letting the height
/// grow with the content, and store every view's absolute rectangle.
///
/// A root without an explicit width spans the whole available width.
///
/// Returns the size of `root`.
pub fn compute_layout(root: ViewId, available_width: f32) -> Result<Size<f32>, LayoutError> {
    let mut taffy: TaffyTree<ViewId> = TaffyTree::new();
    let root_node = build_node(&mut taffy, root)?;
    let mut root_style = root.style();
    if root_style.size.width == Dimension::auto() {
        root_style.size.width = Dimension::length(available_width);
        taffy.set_style(root_node, root_style)?;
    }

    taffy.compute_layout_with_measure(
        root_node,
        Size {
            width: AvailableSpace::Definite(available_width),
            height: AvailableSpace::MaxContent,
        },
        |known_dimensions, _available_space, _node, view, _style| {
            let intrinsic = view
                .map(|id| {
                    let state = id.state();
                    let state = state.borrow();
                    state.widget.intrinsic_size(&state.appearance)
                })
                .unwrap_or(Size::ZERO);
            Size {
                width: known_dimensions.width.unwrap_or(intrinsic.width),
                height: known_dimensions.height.unwrap_or(intrinsic.height),
            }
        },
    )?;

    store_rects(&taffy, root_node, Point::ZERO)?;
    let size = taffy.layout(root_node)?.size;
    tracing::trace!(
        root = ?root,
        width = size.width,
        height = size.height,
        "layout computed"
    );
    Ok(size)
}

fn build_node(taffy: &mut TaffyTree<ViewId>, id: ViewId) -> Result<NodeId, LayoutError> {
    let children = id
        .children()
        .into_iter()
        .map(|child| build_node(taffy, child))
        .collect::<Result<Vec<_>, _>>()?;
    let node = taffy.new_with_children(id.style(), &children)?;
    taffy.set_node_context(node, Some(id))?;
    Ok(node)
}

fn store_rects(taffy: &TaffyTree<ViewId>, node: NodeId, origin: Point) -> Result<(), LayoutError> {
    let layout = taffy.layout(node)?;
    let origin = Point::new(
        origin.x + layout.location.x as f64,
        origin.y + layout.location.y as f64,
    );
    let size = layout.size;
    if let Some(id) = taffy.get_node_context(node) {
        id.set_layout_rect(Rect::from_origin_size(
            origin,
            (size.width as f64, size.height as f64),
        ));
    }
    for child in taffy.children(node)? {
        store_rects(taffy, child, origin)?;
    }
    Ok(())
}
