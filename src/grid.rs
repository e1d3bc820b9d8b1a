//! Grid instances: a rectangular field of free and blocked cells with a
//! single source cell. A separator of bounded size encloses the source when
//! it cuts every escape route to the grid boundary, which is modelled by one
//! extra vertex wired to all non-blocked boundary cells.

use std::collections::BTreeSet;
use std::io::BufRead;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::cuts::VertexSet;
use crate::error::InstanceError;

pub struct GridInstance {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
    source: usize,
    graph: UnGraph<(), ()>,
}

impl GridInstance {
    /// Parse a grid: a `rows cols` header line followed by `rows` lines over
    /// the alphabet `.` (free), `#` (blocked) and `s` (source). The last `s`
    /// wins when several are present.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, InstanceError> {
        let mut lines = reader.lines();

        let header = lines.next().ok_or(InstanceError::MissingHeader)??;
        let mut parts = header.split_whitespace();
        let rows: usize = parts.next().ok_or(InstanceError::MissingHeader)?.parse()?;
        let cols: usize = parts.next().ok_or(InstanceError::MissingHeader)?.parse()?;

        let mut blocked = vec![false; rows * cols];
        let mut source = None;
        for row in 0..rows {
            let line = lines.next().ok_or(InstanceError::MissingRow(row))??;
            let cells: Vec<char> = line.trim_end().chars().collect();
            if cells.len() < cols {
                return Err(InstanceError::ShortRow(row));
            }
            for column in 0..cols {
                match cells[column] {
                    '#' => blocked[row * cols + column] = true,
                    's' => source = Some(row * cols + column),
                    '.' => {}
                    cell => return Err(InstanceError::UnexpectedCell { row, column, cell }),
                }
            }
        }
        let source = source.ok_or(InstanceError::MissingSource)?;

        Ok(Self::assemble(rows, cols, blocked, source))
    }

    /// Build the cell graph plus the boundary sink.
    fn assemble(rows: usize, cols: usize, blocked: Vec<bool>, source: usize) -> Self {
        let cell_count = rows * cols;
        let mut graph = UnGraph::<(), ()>::with_capacity(cell_count + 1, 2 * cell_count);
        for _ in 0..=cell_count {
            graph.add_node(());
        }

        // 4-neighborhood between non-blocked cells
        for row in 0..rows {
            for col in 0..cols {
                let u = row * cols + col;
                if blocked[u] {
                    continue;
                }
                if col + 1 < cols && !blocked[u + 1] {
                    graph.add_edge(NodeIndex::new(u), NodeIndex::new(u + 1), ());
                }
                if row + 1 < rows && !blocked[u + cols] {
                    graph.add_edge(NodeIndex::new(u), NodeIndex::new(u + cols), ());
                }
            }
        }

        // the sink reaches every non-blocked boundary cell, each exactly once
        let mut boundary = BTreeSet::new();
        for row in 0..rows {
            boundary.insert(row * cols);
            boundary.insert(row * cols + cols - 1);
        }
        for col in 0..cols {
            boundary.insert(col);
            boundary.insert((rows - 1) * cols + col);
        }
        for &cell in &boundary {
            if !blocked[cell] {
                graph.add_edge(NodeIndex::new(cell_count), NodeIndex::new(cell), ());
            }
        }

        Self {
            rows,
            cols,
            blocked,
            source,
            graph,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn graph(&self) -> &UnGraph<(), ()> {
        &self.graph
    }

    /// Index of the source cell.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Index of the synthetic boundary vertex.
    pub fn sink(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_blocked(&self, cell: usize) -> bool {
        self.blocked[cell]
    }

    /// Format a cell index as `(x,y)` coordinates.
    pub fn cell_label(&self, cell: usize) -> String {
        format!("({},{})", cell % self.cols, cell / self.cols)
    }

    /// Render the grid with the separator marked: `#` blocked, `X` separator,
    /// `s` source (the source wins over `X`). Starts with the header line.
    pub fn render(&self, separator: &VertexSet) -> String {
        let cell_count = self.rows * self.cols;
        let mut field: Vec<Vec<char>> = (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        if self.blocked[row * self.cols + col] {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect()
            })
            .collect();
        for cell in separator.iter() {
            if cell < cell_count && !self.blocked[cell] {
                field[cell / self.cols][cell % self.cols] = 'X';
            }
        }
        if !self.blocked[self.source] {
            field[self.source / self.cols][self.source % self.cols] = 's';
        }

        let mut out = format!("{} {}\n", self.rows, self.cols);
        for row in field {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::GridInstance;
    use crate::cuts::{important_separators, source_component, VertexSet};
    use crate::error::InstanceError;
    use std::io::Cursor;

    fn vset(items: &[usize]) -> VertexSet {
        items.iter().copied().collect()
    }

    #[test]
    fn parses_cells_and_source() {
        let instance = GridInstance::read(Cursor::new("2 3\n#.s\n..#\n")).unwrap();
        assert_eq!(instance.rows(), 2);
        assert_eq!(instance.cols(), 3);
        assert_eq!(instance.source(), 2);
        assert_eq!(instance.sink(), 6);
        assert!(instance.is_blocked(0));
        assert!(instance.is_blocked(5));
        assert!(!instance.is_blocked(1));
    }

    #[test]
    fn open_grid_wiring() {
        let instance = GridInstance::read(Cursor::new("3 3\n...\n.s.\n...\n")).unwrap();
        // 12 neighborhood edges plus 8 boundary cells wired to the sink
        assert_eq!(instance.graph().edge_count(), 20);
        assert_eq!(instance.graph().node_count(), 10);
    }

    #[test]
    fn blocked_cells_stay_isolated() {
        let instance = GridInstance::read(Cursor::new("2 2\ns#\n..\n")).unwrap();
        let graph = instance.graph();
        assert_eq!(
            graph
                .neighbors(petgraph::graph::NodeIndex::new(1))
                .count(),
            0
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            GridInstance::read(Cursor::new("")),
            Err(InstanceError::MissingHeader)
        ));
        assert!(matches!(
            GridInstance::read(Cursor::new("2\n..\n..\n")),
            Err(InstanceError::MissingHeader)
        ));
        assert!(matches!(
            GridInstance::read(Cursor::new("x 2\n..\n..\n")),
            Err(InstanceError::BadIntError(_))
        ));
        assert!(matches!(
            GridInstance::read(Cursor::new("2 2\n.s\n")),
            Err(InstanceError::MissingRow(1))
        ));
        assert!(matches!(
            GridInstance::read(Cursor::new("2 2\n.s\n.\n")),
            Err(InstanceError::ShortRow(1))
        ));
        assert!(matches!(
            GridInstance::read(Cursor::new("2 2\n.s\n.q\n")),
            Err(InstanceError::UnexpectedCell {
                row: 1,
                column: 1,
                cell: 'q'
            })
        ));
        assert!(matches!(
            GridInstance::read(Cursor::new("2 2\n..\n..\n")),
            Err(InstanceError::MissingSource)
        ));
    }

    #[test]
    fn center_source_is_enclosed_by_its_neighbors() {
        let instance = GridInstance::read(Cursor::new("3 3\n...\n.s.\n...\n")).unwrap();
        let separators =
            important_separators(instance.graph(), instance.source(), instance.sink(), 4)
                .unwrap();
        assert_eq!(separators, vec![vset(&[1, 3, 5, 7])]);

        let too_small =
            important_separators(instance.graph(), instance.source(), instance.sink(), 3)
                .unwrap();
        assert!(too_small.is_empty());
    }

    #[test]
    fn walled_source_needs_no_separator() {
        let input = "4 4\n####\n#s.#\n#..#\n####\n";
        let instance = GridInstance::read(Cursor::new(input)).unwrap();
        let separators =
            important_separators(instance.graph(), instance.source(), instance.sink(), 2)
                .unwrap();
        assert_eq!(separators, vec![VertexSet::new()]);
    }

    #[test]
    fn render_marks_separator_and_source() {
        let instance = GridInstance::read(Cursor::new("3 3\n...\n.s.\n...\n")).unwrap();
        let rendered = instance.render(&vset(&[1, 3, 5, 7]));
        assert_eq!(rendered, "3 3\n.X.\nXsX\n.X.\n");
    }

    #[test]
    fn render_keeps_blocked_cells() {
        let instance = GridInstance::read(Cursor::new("2 2\ns#\n..\n")).unwrap();
        assert_eq!(instance.render(&VertexSet::new()), "2 2\ns#\n..\n");
    }

    #[test]
    fn best_separator_maximizes_the_enclosed_region() {
        // a corridor: cutting right before the exit encloses the most cells
        let input = "3 5\n#####\n#s...\n#####\n";
        let instance = GridInstance::read(Cursor::new(input)).unwrap();
        let separators =
            important_separators(instance.graph(), instance.source(), instance.sink(), 1)
                .unwrap();
        assert_eq!(separators, vec![vset(&[9])]);
        let component = source_component(instance.graph(), instance.source(), &separators[0]);
        assert_eq!(component, vset(&[6, 7, 8]));
    }

    #[test]
    fn cell_labels_are_x_y() {
        let instance = GridInstance::read(Cursor::new("2 3\ns..\n...\n")).unwrap();
        assert_eq!(instance.cell_label(4), "(1,1)");
        assert_eq!(instance.cell_label(2), "(2,0)");
    }
}
