//! Background search thread.
//!
//! A `SearchWorker` owns one thread and a request channel. Each submitted
//! request carries its own board snapshot and gets a one-shot reply
//! channel, so the caller and the search never share mutable state.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::search::alpha_beta::{AlphaBetaSearcher, MoveEvaluation, SearchConfig, SearchResult};
use crate::search::board_scoring::{BoardScorer, PositionEvaluator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    BestMove,
    EvaluateMoves,
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub board: Board,
    pub side: Color,
    pub depth: u8,
    pub kind: SearchKind,
}

impl SearchRequest {
    pub fn best_move(board: &Board, side: Color, depth: u8) -> Self {
        Self {
            board: board.clone(),
            side,
            depth,
            kind: SearchKind::BestMove,
        }
    }

    pub fn evaluate_moves(board: &Board, side: Color, depth: u8) -> Self {
        Self {
            board: board.clone(),
            side,
            depth,
            kind: SearchKind::EvaluateMoves,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResponse {
    BestMove(Option<SearchResult>),
    Evaluations(Vec<MoveEvaluation>),
}

type Job = (SearchRequest, Sender<SearchResponse>);

pub struct SearchWorker {
    requests: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Worker scoring leaves with the default heuristic evaluator.
    pub fn spawn_default() -> CheckersResult<Self> {
        Self::spawn(PositionEvaluator::default())
    }

    pub fn spawn<S>(scorer: S) -> CheckersResult<Self>
    where
        S: BoardScorer + Clone + 'static,
    {
        let (tx, rx) = channel::<Job>();
        let handle = thread::Builder::new()
            .name("checkers-search".to_owned())
            .spawn(move || worker_loop(scorer, rx))
            .map_err(|e| CheckersError::Engine(e.to_string()))?;

        Ok(Self {
            requests: Some(tx),
            handle: Some(handle),
        })
    }

    /// Queue `request`; the returned receiver yields exactly one response.
    pub fn submit(&self, request: SearchRequest) -> CheckersResult<Receiver<SearchResponse>> {
        let (reply_tx, reply_rx) = channel();
        self.requests
            .as_ref()
            .ok_or(CheckersError::WorkerDisconnected)?
            .send((request, reply_tx))
            .map_err(|_| CheckersError::WorkerDisconnected)?;
        Ok(reply_rx)
    }

    /// Submit and block until the reply arrives.
    pub fn run(&self, request: SearchRequest) -> CheckersResult<SearchResponse> {
        self.submit(request)?
            .recv()
            .map_err(|_| CheckersError::WorkerDisconnected)
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the sender ends the worker loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop<S: BoardScorer + Clone>(scorer: S, jobs: Receiver<Job>) {
    info!("search worker started");
    for (request, reply) in jobs {
        let searcher = AlphaBetaSearcher::new(
            scorer.clone(),
            SearchConfig {
                depth: request.depth,
            },
        );
        let response = match request.kind {
            SearchKind::BestMove => {
                SearchResponse::BestMove(searcher.best_move(&request.board, request.side))
            }
            SearchKind::EvaluateMoves => SearchResponse::Evaluations(
                searcher.all_move_evaluations(&request.board, request.side),
            ),
        };
        if reply.send(response).is_err() {
            debug!("search reply dropped by caller");
        }
    }
    info!("search worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::alpha_beta::{evaluate_moves, search_best_move};
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn worker_matches_direct_search() {
        let board = Board::new_game();
        let worker = SearchWorker::spawn_default().expect("worker should spawn");

        let response = worker
            .run(SearchRequest::best_move(&board, Color::Light, 3))
            .expect("worker should reply");
        assert_eq!(
            response,
            SearchResponse::BestMove(search_best_move(&board, Color::Light, 3))
        );

        let response = worker
            .run(SearchRequest::evaluate_moves(&board, Color::Dark, 2))
            .expect("worker should reply");
        assert_eq!(
            response,
            SearchResponse::Evaluations(evaluate_moves(&board, Color::Dark, 2))
        );
    }

    #[test]
    fn requests_are_answered_in_submission_order() {
        let board = Board::new_game();
        let worker = SearchWorker::spawn(MaterialScorer::default()).expect("worker should spawn");

        let receivers: Vec<_> = (1..=3)
            .map(|depth| {
                worker
                    .submit(SearchRequest::best_move(&board, Color::Light, depth))
                    .expect("submit should succeed")
            })
            .collect();

        for rx in receivers {
            match rx.recv().expect("reply should arrive") {
                SearchResponse::BestMove(Some(result)) => assert!(result.stats.nodes > 0),
                other => panic!("unexpected response {other:?}"),
            }
        }
    }

    #[test]
    fn submitted_board_is_a_snapshot() {
        let mut board = Board::new_game();
        let worker = SearchWorker::spawn_default().expect("worker should spawn");
        let rx = worker
            .submit(SearchRequest::evaluate_moves(&board, Color::Light, 1))
            .expect("submit should succeed");
        board = Board::new_empty();

        match rx.recv().expect("reply should arrive") {
            SearchResponse::Evaluations(evals) => assert_eq!(evals.len(), 7),
            other => panic!("unexpected response {other:?}"),
        }
        assert_eq!(board.count_pieces(Color::Light), 0);
    }

    #[test]
    fn no_move_position_replies_none() {
        let worker = SearchWorker::spawn_default().expect("worker should spawn");
        let response = worker
            .run(SearchRequest::best_move(&Board::new_empty(), Color::Dark, 4))
            .expect("worker should reply");
        assert_eq!(response, SearchResponse::BestMove(None));
    }
}
