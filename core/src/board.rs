use ndarray::Array2;

use crate::*;

/// The 10x10 minefield. Sole owner of cell state.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Generates a board from `seed` by rejection sampling.
    pub fn new(seed: u64) -> Self {
        Self::generate(RejectionSampler::new(seed))
    }

    /// Generates a board from a freshly drawn seed.
    pub fn random() -> Self {
        use rand::Rng;

        Self::new(rand::rng().random())
    }

    pub fn generate(generator: impl MinefieldGenerator) -> Self {
        Self::from_layout(&generator.generate())
    }

    /// Derives adjacency counts for every safe cell once all mines are placed.
    pub fn from_layout(layout: &MineLayout) -> Self {
        let cells = Array2::from_shape_fn((ROWS, COLS), |pos| {
            if layout.contains_mine(pos) {
                Cell::new(CellKind::Mine)
            } else {
                Cell::new(CellKind::Empty(layout.adjacent_mine_count(pos)))
            }
        });
        Self { cells }
    }

    /// Rebuilds a board from already validated cells in row-major order.
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), CELLS);
        let mut cells = cells.into_iter();
        let cells = Array2::from_shape_fn((ROWS, COLS), |_| cells.next().unwrap_or_default());
        Self { cells }
    }

    pub(crate) fn cell(&self, pos: Pos) -> Cell {
        self.cells[pos.to_nd_index()]
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        let pos = validate_coords(coords)?;
        Ok(self.cell(pos).view())
    }

    /// Every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Pos, CellView)> + '_ {
        iter_positions().map(|pos| (pos, self.cell(pos).view()))
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_mine()).count()
    }

    pub fn flag_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.flagged).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.revealed).count()
    }

    /// Safe cells still waiting to be revealed.
    pub fn hidden_safe_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !cell.is_mine() && !cell.revealed)
            .count()
    }

    pub fn has_revealed_mine(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_mine() && cell.revealed)
    }

    /// Reveals the cell at `coords`, returning whether a mine went off.
    ///
    /// Flagged cells are left alone and report no explosion. Revealing a zero cell opens its whole connected
    /// zero region plus that region's border.
    pub fn reveal(&mut self, coords: Coord2) -> Result<bool> {
        let pos = validate_coords(coords)?;
        let cell = self.cell(pos);

        if cell.revealed {
            return Err(GameError::AlreadyRevealed);
        }
        if cell.flagged {
            log::trace!("Ignoring reveal of flagged cell {:?}", pos);
            return Ok(false);
        }

        self.cells[pos.to_nd_index()].revealed = true;
        log::trace!("Revealed {:?} ({:?})", pos, cell.kind);

        if cell.is_mine() {
            return Ok(true);
        }

        if cell.is_zero() {
            let opened = self.flood_from(pos);
            log::debug!("Flood from {:?} opened {} more cells", pos, opened);
        }
        Ok(false)
    }

    /// Opens every safe neighbor reachable through zero cells, returning how many were opened.
    fn flood_from(&mut self, start: Pos) -> usize {
        let mut opened = 0;
        let mut to_visit = vec![start];

        while let Some(visit_pos) = to_visit.pop() {
            for neighbor in NeighborIter::new(visit_pos) {
                let cell = &mut self.cells[neighbor.to_nd_index()];
                if cell.revealed || cell.is_mine() {
                    continue;
                }

                cell.revealed = true;
                opened += 1;

                if cell.is_zero() {
                    to_visit.push(neighbor);
                }
            }
        }

        opened
    }

    /// Flips the flag on a hidden cell; revealed cells are left unchanged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<()> {
        let pos = validate_coords(coords)?;
        let cell = &mut self.cells[pos.to_nd_index()];

        if cell.revealed {
            log::trace!("Ignoring flag on revealed cell {:?}", pos);
            return Ok(());
        }

        cell.flagged = !cell.flagged;
        log::trace!("Flag at {:?} is now {}", pos, cell.flagged);
        Ok(())
    }

    /// Whether every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine() || cell.revealed)
    }

    #[cfg(test)]
    pub(crate) fn reveal_all_safe(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| !cell.is_mine()) {
            cell.revealed = true;
        }
    }
}
