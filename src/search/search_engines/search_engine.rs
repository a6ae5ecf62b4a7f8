use crate::search::{
    search_engines::{
        AStarSearch, BreadthFirstSearch, DepthFirstSearch, GreedyBestFirstSearch,
        IterativeDeepeningSearch, RecursiveBestFirstSearch, UniformCostSearch,
    },
    Heuristic, Problem, SearchController, SearchResult, SearchStatistics,
};
use strum_macros::EnumIter;

pub trait SearchEngine<P: Problem + ?Sized> {
    /// Search for a plan from the problem's initial state to a goal. A
    /// cancelled search returns [`SearchResult::Failure`].
    fn search(&mut self, problem: &P) -> (SearchResult<P::Action>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    /// Breadth-first graph search
    BFS,
    /// Depth-first graph search
    DFS,
    /// Uniform-cost search
    UCS,
    /// Iterative deepening depth-first search
    IDS,
    /// Greedy best-first search
    GBFS,
    /// A* search
    AStar,
    /// Recursive best-first search
    RBFS,
}

impl SearchEngineName {
    /// Whether the engine makes use of a heuristic.
    pub fn is_informed(&self) -> bool {
        matches!(
            self,
            SearchEngineName::GBFS | SearchEngineName::AStar | SearchEngineName::RBFS
        )
    }

    /// Run the named engine with its default settings. Uninformed engines
    /// ignore the heuristic.
    pub fn search<P>(
        &self,
        problem: &P,
        heuristic: Box<dyn Heuristic<P::State>>,
        controller: SearchController,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: Problem + ?Sized,
    {
        match self {
            SearchEngineName::BFS => BreadthFirstSearch::new()
                .with_controller(controller)
                .search(problem),
            SearchEngineName::DFS => DepthFirstSearch::new()
                .with_controller(controller)
                .search(problem),
            SearchEngineName::UCS => UniformCostSearch::new()
                .with_controller(controller)
                .search(problem),
            SearchEngineName::IDS => IterativeDeepeningSearch::new()
                .with_controller(controller)
                .search(problem),
            SearchEngineName::GBFS => GreedyBestFirstSearch::new(heuristic)
                .with_controller(controller)
                .search(problem),
            SearchEngineName::AStar => AStarSearch::new(heuristic)
                .with_controller(controller)
                .search(problem),
            SearchEngineName::RBFS => RecursiveBestFirstSearch::new(heuristic)
                .with_controller(controller)
                .search(problem),
        }
    }
}
