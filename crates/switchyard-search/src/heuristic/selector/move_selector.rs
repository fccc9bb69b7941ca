//! Typed move selectors.
//!
//! Move selectors yield concrete move types directly, enabling
//! monomorphization: no boxed moves, no virtual dispatch on the hot path.
//! Selection is either exhaustive (cartesian enumeration) or sampling
//! (the [`ShuffledSelectionLimit`] decorator bounds and randomizes an
//! inner selection).

use std::cell::RefCell;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use switchyard_core::domain::{PlanningSolution, VariableHandle};
use switchyard_core::Result;
use switchyard_scoring::ScoreDirector;

use crate::heuristic::moves::{ChangeMove, Move, PillarSwapMove, SwapMove};

use super::entity::EntitySelector;
use super::pillar::DefaultPillarSelector;

/// A typed move selector that yields moves of type `M`.
///
/// Selection never mutates the solution. A yielded `Err` signals a hard
/// failure (such as a value-range provider that could not produce a
/// range) and aborts the step that consumes it; it is not a skippable
/// candidate.
pub trait MoveSelector<S: PlanningSolution, M: Move<S>>: Send + Debug {
    /// Returns an iterator over candidate moves for the current solution.
    ///
    /// Every yielded move must still pass its own `is_doable` check.
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> Box<dyn Iterator<Item = Result<M>> + 'a>;

    /// Returns the approximate number of moves.
    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize;
}

/// Generates a [`ChangeMove`] for every entity/value combination.
///
/// Values are drawn from the variable's extracted value range - per entity
/// when the range is entity-dependent, once per step otherwise. When the
/// range allows the unassigned state, an unassigning move is generated
/// too.
pub struct ChangeMoveSelector<S, V, ES> {
    entity_selector: ES,
    variable: VariableHandle<S, V>,
}

impl<S, V: Debug, ES: Debug> Debug for ChangeMoveSelector<S, V, ES> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeMoveSelector")
            .field("entity_selector", &self.entity_selector)
            .field("variable", &self.variable.name())
            .finish()
    }
}

impl<S, V, ES> ChangeMoveSelector<S, V, ES>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + Debug + 'static,
    ES: EntitySelector<S>,
{
    /// Creates a new change move selector.
    pub fn new(entity_selector: ES, variable: VariableHandle<S, V>) -> Self {
        Self {
            entity_selector,
            variable,
        }
    }
}

impl<S, V, ES> MoveSelector<S, ChangeMove<S, V>> for ChangeMoveSelector<S, V, ES>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + Debug + 'static,
    ES: EntitySelector<S>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> Box<dyn Iterator<Item = Result<ChangeMove<S, V>>> + 'a> {
        let solution = score_director.working_solution();
        let descriptor_index = self.entity_selector.descriptor_index();
        let entity_independent = self.variable.is_value_range_entity_independent();

        let shared_range = if entity_independent {
            match self.variable.extract_value_range(solution, 0) {
                Ok(range) => Some(range),
                Err(e) => return Box::new(std::iter::once(Err(e))),
            }
        } else {
            None
        };

        let mut moves = Vec::new();
        for entity_index in self.entity_selector.iter(score_director) {
            let extracted;
            let range = match &shared_range {
                Some(range) => range,
                None => match self.variable.extract_value_range(solution, entity_index) {
                    Ok(range) => {
                        extracted = range;
                        &extracted
                    }
                    Err(e) => return Box::new(std::iter::once(Err(e))),
                },
            };
            for value in range.iter() {
                moves.push(Ok(ChangeMove::new(
                    entity_index,
                    descriptor_index,
                    self.variable,
                    Some(value.clone()),
                )));
            }
            if range.allows_unassigned() {
                moves.push(Ok(ChangeMove::new(
                    entity_index,
                    descriptor_index,
                    self.variable,
                    None,
                )));
            }
        }
        Box::new(moves.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        self.iter_moves(score_director).count()
    }
}

/// Generates a [`SwapMove`] for every unordered pair of distinct entities.
pub struct SwapMoveSelector<S, V, ES> {
    entity_selector: ES,
    variables: SmallVec<[VariableHandle<S, V>; 2]>,
}

impl<S, V: Debug, ES: Debug> Debug for SwapMoveSelector<S, V, ES> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapMoveSelector")
            .field("entity_selector", &self.entity_selector)
            .field(
                "variables",
                &self.variables.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<S, V, ES> SwapMoveSelector<S, V, ES>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + Debug + 'static,
    ES: EntitySelector<S>,
{
    /// Creates a new swap move selector.
    pub fn new(entity_selector: ES, variables: SmallVec<[VariableHandle<S, V>; 2]>) -> Self {
        Self {
            entity_selector,
            variables,
        }
    }
}

impl<S, V, ES> MoveSelector<S, SwapMove<S, V>> for SwapMoveSelector<S, V, ES>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + Debug + 'static,
    ES: EntitySelector<S>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> Box<dyn Iterator<Item = Result<SwapMove<S, V>>> + 'a> {
        let descriptor_index = self.entity_selector.descriptor_index();
        let entities: Vec<usize> = self.entity_selector.iter(score_director).collect();

        let mut moves = Vec::new();
        for (position, &left) in entities.iter().enumerate() {
            for &right in &entities[position + 1..] {
                moves.push(Ok(SwapMove::new(
                    left,
                    right,
                    descriptor_index,
                    self.variables.clone(),
                )));
            }
        }
        Box::new(moves.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        let n = self.entity_selector.size(score_director);
        n * n.saturating_sub(1) / 2
    }
}

/// Generates a [`PillarSwapMove`] for every unordered pair of distinct
/// pillars.
///
/// Pillar pairs never pair a pillar with itself; pillars of size 1 are
/// legal.
pub struct PillarSwapMoveSelector<S, V, ES> {
    pillar_selector: DefaultPillarSelector<S, V, ES>,
}

impl<S, V: Debug, ES: Debug> Debug for PillarSwapMoveSelector<S, V, ES> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PillarSwapMoveSelector")
            .field("pillar_selector", &self.pillar_selector)
            .finish()
    }
}

impl<S, V, ES> PillarSwapMoveSelector<S, V, ES>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + Debug + 'static,
    ES: EntitySelector<S>,
{
    /// Creates a new pillar swap move selector.
    pub fn new(pillar_selector: DefaultPillarSelector<S, V, ES>) -> Self {
        Self { pillar_selector }
    }
}

impl<S, V, ES> MoveSelector<S, PillarSwapMove<S, V>> for PillarSwapMoveSelector<S, V, ES>
where
    S: PlanningSolution,
    V: Clone + Eq + Hash + Send + Sync + Debug + 'static,
    ES: EntitySelector<S>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> Box<dyn Iterator<Item = Result<PillarSwapMove<S, V>>> + 'a> {
        let pillars = self.pillar_selector.build_pillars(score_director);
        let descriptor_index = self.pillar_selector.descriptor_index();
        let variables = self.pillar_selector.variables().clone();

        let mut moves = Vec::new();
        for (position, left) in pillars.iter().enumerate() {
            for right in &pillars[position + 1..] {
                moves.push(Ok(PillarSwapMove::new(
                    variables.clone(),
                    descriptor_index,
                    left.clone(),
                    right.clone(),
                )));
            }
        }
        Box::new(moves.into_iter())
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        let p = self.pillar_selector.build_pillars(score_director).len();
        p * p.saturating_sub(1) / 2
    }
}

/// Bounds and randomizes an inner selection.
///
/// Collects the inner selector's moves, shuffles them, and yields at most
/// `limit` of them. This is the sampling variant of selection: cheaper
/// steps on large neighborhoods at the cost of completeness.
pub struct ShuffledSelectionLimit<S, M, Inner> {
    inner: Inner,
    limit: Option<usize>,
    rng: RefCell<ChaCha8Rng>,
    _phantom: PhantomData<fn() -> (S, M)>,
}

impl<S, M, Inner: Debug> Debug for ShuffledSelectionLimit<S, M, Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShuffledSelectionLimit")
            .field("inner", &self.inner)
            .field("limit", &self.limit)
            .finish()
    }
}

impl<S, M, Inner> ShuffledSelectionLimit<S, M, Inner> {
    /// Creates a new shuffling decorator with an OS-seeded rng.
    pub fn new(inner: Inner, limit: Option<usize>) -> Self {
        Self {
            inner,
            limit,
            rng: RefCell::new(ChaCha8Rng::from_os_rng()),
            _phantom: PhantomData,
        }
    }

    /// Creates a new shuffling decorator with a fixed seed, for
    /// reproducible selection.
    pub fn with_seed(inner: Inner, limit: Option<usize>, seed: u64) -> Self {
        Self {
            inner,
            limit,
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
            _phantom: PhantomData,
        }
    }
}

impl<S, M, Inner> MoveSelector<S, M> for ShuffledSelectionLimit<S, M, Inner>
where
    S: PlanningSolution,
    M: Move<S>,
    Inner: MoveSelector<S, M>,
{
    fn iter_moves<'a, D: ScoreDirector<S>>(
        &'a self,
        score_director: &'a D,
    ) -> Box<dyn Iterator<Item = Result<M>> + 'a> {
        let mut collected = Vec::new();
        for candidate in self.inner.iter_moves(score_director) {
            match candidate {
                Ok(m) => collected.push(m),
                Err(e) => return Box::new(std::iter::once(Err(e))),
            }
        }

        let mut rng = self.rng.borrow_mut();
        collected.shuffle(&mut *rng);
        if let Some(limit) = self.limit {
            collected.truncate(limit);
        }
        Box::new(collected.into_iter().map(Ok))
    }

    fn size<D: ScoreDirector<S>>(&self, score_director: &D) -> usize {
        let inner_size = self.inner.size(score_director);
        match self.limit {
            Some(limit) => inner_size.min(limit),
            None => inner_size,
        }
    }
}
