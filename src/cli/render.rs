//! Static text renderings of the genre tree and the friendship graph.
//!
//! Both renderers are pure: they build a `String` and leave printing to the
//! caller, which keeps them directly testable.

use std::{collections::BTreeMap, fmt::Write as _};

use reel::{
    store::{CustomerRegistry, FriendGraph, GenreIndex, GenreNode, MovieCatalog},
    CustomerId,
};

/// Renders the genre tree sideways: the right subtree above its parent, the
/// left below, one indent step per level.
///
/// Each node shows the genre, the bucket size, and up to two sample titles.
pub fn category_tree(index: &GenreIndex, catalog: &MovieCatalog) -> String {
    let Some(root) = index.root() else {
        return "No tree data to display.\n".to_string();
    };

    let mut out = String::new();
    branch(&mut out, root, catalog, 0, "");
    out
}

fn branch(
    out: &mut String,
    node: &GenreNode,
    catalog: &MovieCatalog,
    depth: usize,
    connector: &str,
) {
    if let Some(right) = node.right() {
        branch(out, right, catalog, depth + 1, "┌─ ");
    }
    let _ = writeln!(
        out,
        "{}{connector}{}",
        "   ".repeat(depth),
        node_label(node, catalog)
    );
    if let Some(left) = node.left() {
        branch(out, left, catalog, depth + 1, "└─ ");
    }
}

fn node_label(node: &GenreNode, catalog: &MovieCatalog) -> String {
    let movies = node.movies();
    let noun = if movies.len() == 1 { "movie" } else { "movies" };
    let samples: Vec<&str> = movies
        .iter()
        .take(2)
        .map(|&handle| catalog.get(handle).title())
        .collect();
    let mut titles = samples.join(", ");
    if movies.len() > 2 {
        titles.push_str(", …");
    }
    format!("{} ({} {noun}): {titles}", node.genre(), movies.len())
}

/// Renders the friendship graph as nodes on a circle with straight-line
/// edges, on a character canvas of the given width.
///
/// Nodes are labeled `id: name`, or the bare id when the identifier does not
/// resolve to a registered customer. Layout runs in ascending id order, so
/// the picture is stable for a given graph.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn friend_graph(graph: &FriendGraph, registry: &CustomerRegistry, width: usize) -> String {
    if graph.is_empty() {
        return "No graph data to display.\n".to_string();
    }

    let width = width.clamp(24, 120);
    let height = width / 2;
    let mut canvas = vec![vec![' '; width]; height];

    let labels: Vec<(CustomerId, String)> = graph
        .nodes()
        .map(|(id, _)| {
            let label = registry
                .find(id)
                .map_or_else(|| id.to_string(), |customer| format!("{id}: {}", customer.name()));
            (id, label)
        })
        .collect();

    // Circular layout. The horizontal radius leaves room for the labels.
    let n = labels.len();
    let cx = (width / 2) as isize;
    let cy = (height / 2) as isize;
    let rx = ((width as f64) / 2.0 - 8.0).max(4.0);
    let ry = ((height as f64) / 2.0 - 2.0).max(2.0);

    let mut positions = BTreeMap::new();
    for (i, (id, _)) in labels.iter().enumerate() {
        let angle = std::f64::consts::TAU * (i as f64) / (n as f64);
        let x = cx + (rx * angle.cos()).round() as isize;
        let y = cy + (ry * angle.sin()).round() as isize;
        positions.insert(*id, (x, y));
    }

    // Each undirected edge appears in both adjacency lists; drawing only the
    // a <= b direction paints it once (and covers self-connections).
    for (a, neighbors) in graph.nodes() {
        for &b in neighbors {
            if a <= b {
                draw_line(&mut canvas, positions[&a], positions[&b]);
            }
        }
    }

    for (id, label) in &labels {
        let (x, y) = positions[id];
        plot(&mut canvas, x, y, '●');

        let start = if (x + 2 + label.chars().count() as isize) >= width as isize {
            x - 1 - label.chars().count() as isize
        } else {
            x + 2
        };
        for (i, ch) in label.chars().enumerate() {
            plot(&mut canvas, start + i as isize, y, ch);
        }
    }

    let mut out = String::new();
    for row in canvas {
        let line: String = row.into_iter().collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// Integer Bresenham between two canvas points.
fn draw_line(canvas: &mut [Vec<char>], from: (isize, isize), to: (isize, isize)) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(canvas, x, y, '·');
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[allow(clippy::cast_sign_loss)]
fn plot(canvas: &mut [Vec<char>], x: isize, y: isize, ch: char) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(cell) = canvas
        .get_mut(y as usize)
        .and_then(|row| row.get_mut(x as usize))
    {
        *cell = ch;
    }
}

#[cfg(test)]
mod tests {
    use reel::MovieId;

    use super::*;

    #[test]
    fn tree_renders_sideways_with_connectors() {
        let mut catalog = MovieCatalog::new();
        let mut index = GenreIndex::new();
        for (id, title, genre) in [
            (1, "Titanic", "Drama"),
            (2, "Die Hard", "Action"),
            (3, "Matrix", "SciFi"),
        ] {
            let handle = catalog.add(MovieId::new(id), title.to_string(), genre.to_string());
            index.insert(genre, handle);
        }

        let expected = "   ┌─ SciFi (1 movie): Matrix\n\
                        Drama (1 movie): Titanic\n\
                        \x20\x20\x20└─ Action (1 movie): Die Hard\n";
        assert_eq!(category_tree(&index, &catalog), expected);
    }

    #[test]
    fn tree_truncates_long_buckets() {
        let mut catalog = MovieCatalog::new();
        let mut index = GenreIndex::new();
        for (id, title) in [(1, "Alien"), (2, "Dune"), (3, "Matrix")] {
            let handle = catalog.add(MovieId::new(id), title.to_string(), "SciFi".to_string());
            index.insert("SciFi", handle);
        }

        assert_eq!(
            category_tree(&index, &catalog),
            "SciFi (3 movies): Alien, Dune, …\n"
        );
    }

    #[test]
    fn empty_tree_reports_no_data() {
        let index = GenreIndex::new();
        let catalog = MovieCatalog::new();
        assert_eq!(category_tree(&index, &catalog), "No tree data to display.\n");
    }

    #[test]
    fn graph_labels_every_node() {
        let mut registry = CustomerRegistry::new();
        registry.add(CustomerId::new(1), "Alice".to_string());
        registry.add(CustomerId::new(2), "Bob".to_string());

        let mut graph = FriendGraph::new();
        graph.add_connection(CustomerId::new(1), CustomerId::new(2));

        let rendered = friend_graph(&graph, &registry, 60);
        assert!(rendered.contains("1: Alice"));
        assert!(rendered.contains("2: Bob"));
        assert!(rendered.contains('·'), "edge should be drawn");
    }

    #[test]
    fn graph_falls_back_to_bare_id_for_unknown_customers() {
        let registry = CustomerRegistry::new();
        let mut graph = FriendGraph::new();
        graph.add_customer(CustomerId::new(7));

        let rendered = friend_graph(&graph, &registry, 40);
        assert!(rendered.contains('7'));
        assert!(rendered.contains('●'));
    }

    #[test]
    fn empty_graph_reports_no_data() {
        let registry = CustomerRegistry::new();
        let graph = FriendGraph::new();
        assert_eq!(
            friend_graph(&graph, &registry, 60),
            "No graph data to display.\n"
        );
    }
}
