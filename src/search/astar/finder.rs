use std::hash::Hash;

use crate::{
    search::astar::{Path, SearchError, SearchOptions, a_star_with_stats},
    statistics::Stats,
};

/// A reusable A* search handle bundling a heuristic, a neighbor function and options.
///
/// Nothing is carried over from one [`PathFinder::search`] call to the next: every
/// call builds its own open set, closed set, running-cost map and parent links.
pub struct PathFinder<H, G> {
    heuristic: H,
    neighbors: G,
    options: SearchOptions,
}

impl<H, G> PathFinder<H, G> {
    pub fn new(heuristic: H, neighbors: G) -> Self {
        PathFinder {
            heuristic,
            neighbors,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn search<N, I>(&mut self, start: N) -> Result<Path<N>, SearchError>
    where
        N: Clone + Eq + Hash,
        H: Fn(&N) -> f64,
        G: FnMut(&N) -> I,
        I: IntoIterator<Item = (N, f64)>,
    {
        self.search_with_stats(start, &mut Stats::new())
    }

    pub fn search_with_stats<N, I>(
        &mut self,
        start: N,
        stats: &mut Stats,
    ) -> Result<Path<N>, SearchError>
    where
        N: Clone + Eq + Hash,
        H: Fn(&N) -> f64,
        G: FnMut(&N) -> I,
        I: IntoIterator<Item = (N, f64)>,
    {
        a_star_with_stats(
            start,
            &self.heuristic,
            &mut self.neighbors,
            &self.options,
            stats,
        )
    }
}
