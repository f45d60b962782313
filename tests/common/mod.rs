#![allow(dead_code)]

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rank_ga::{
    chromosome::ChromosomeProvider,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    search::SearchOptions,
};

pub const BITS: u32 = 6;

/// A non-negative integer below 64, crossed and mutated bit by bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SmallNumber(pub u8);

impl SmallNumber {
    pub fn value(&self) -> i64 {
        self.0 as i64
    }

    fn bit(&self, index: u32) -> u8 {
        (self.0 >> index) & 1
    }
}

/// Searches a bounded integer domain for the extremum of `equation`.
pub struct SmallQuadratic {
    equation: fn(i64) -> f64,
    lower: u8,
    upper: u8,
    population_size: usize,
    find_min: bool,
}

impl SmallQuadratic {
    pub fn new(equation: fn(i64) -> f64, bounds: (u8, u8), population_size: usize) -> Self {
        assert!(bounds.0 < bounds.1 && bounds.1 < (1u8 << BITS));
        Self {
            equation,
            lower: bounds.0,
            upper: bounds.1,
            population_size,
            find_min: true,
        }
    }

    pub fn maximizing(mut self) -> Self {
        self.find_min = false;
        self
    }

    pub fn objective(&self, x: i64) -> f64 {
        (self.equation)(x)
    }
}

impl ChromosomeProvider for SmallQuadratic {
    type Chromosome = SmallNumber;

    fn generate_initial_population(
        &self,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<SmallNumber>> {
        Ok((0..self.population_size)
            .map(|_| SmallNumber(rng.gen_range(self.lower..=self.upper)))
            .collect())
    }

    fn evaluate(&self, chromosome: &SmallNumber) -> f64 {
        let score = self.objective(chromosome.value());
        if self.find_min {
            -score
        } else {
            score
        }
    }

    fn crossover(
        &self,
        parent1: &SmallNumber,
        parent2: &SmallNumber,
        options: &SearchOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<SmallNumber> {
        let child = (0..BITS).fold(0u8, |acc, index| {
            let gene = if rng.percent_chance(options.get_crossover_rate()) {
                parent1.bit(index)
            } else {
                parent2.bit(index)
            };
            acc | (gene << index)
        });
        Ok(SmallNumber(child))
    }

    fn mutate(
        &self,
        chromosome: SmallNumber,
        options: &SearchOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<SmallNumber> {
        let mut value = chromosome.0;
        for index in 0..BITS {
            if rng.percent_chance(options.get_mutation_rate()) {
                value ^= 1u8 << index;
            }
        }
        Ok(SmallNumber(value))
    }

    fn is_invalid(&self, chromosome: &SmallNumber) -> bool {
        chromosome.0 < self.lower || chromosome.0 > self.upper
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    D,
    K,
}

/// Lineup slots in order: one QB, two RB, three WR, one TE, one D, one K.
pub const SLOTS: [Position; 9] = [
    Position::QB,
    Position::RB,
    Position::RB,
    Position::WR,
    Position::WR,
    Position::WR,
    Position::TE,
    Position::D,
    Position::K,
];

pub const MAX_PER_TEAM: usize = 3;

const MAX_INITIAL_ATTEMPTS: usize = 100_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub salary: u32,
    pub projected_points: f64,
    pub team: String,
    pub position: Position,
    pub healthy: bool,
}

/// Player ids, one per slot of [`SLOTS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lineup(pub Vec<u32>);

impl Lineup {
    pub fn count(&self, id: u32) -> usize {
        self.0.iter().filter(|&&player| player == id).count()
    }
}

/// Picks the highest projected lineup under a salary cap.
pub struct RosterProvider {
    players: HashMap<u32, Player>,
    by_position: HashMap<Position, Vec<u32>>,
    salary_cap: u32,
    population_size: usize,
}

impl RosterProvider {
    /// Builds the provider; unhealthy players are never picked.
    pub fn new(players: Vec<Player>, salary_cap: u32, population_size: usize) -> Self {
        let mut by_position: HashMap<Position, Vec<u32>> = HashMap::new();
        for player in players.iter().filter(|player| player.healthy) {
            by_position.entry(player.position).or_default().push(player.id);
        }

        Self {
            players: players.into_iter().map(|player| (player.id, player)).collect(),
            by_position,
            salary_cap,
            population_size,
        }
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn salary(&self, lineup: &Lineup) -> u32 {
        lineup.0.iter().filter_map(|id| self.player(*id)).map(|p| p.salary).sum()
    }

    fn position_of(&self, id: u32) -> Option<Position> {
        self.player(id).map(|player| player.position)
    }

    fn pool(&self, position: Position) -> &[u32] {
        self.by_position
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn distinct_at(&self, lineup: &Lineup, position: Position) -> usize {
        let mut ids: Vec<u32> = lineup
            .0
            .iter()
            .copied()
            .filter(|id| self.position_of(*id) == Some(position))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    fn random_player_not_in(
        &self,
        lineup: &Lineup,
        position: Position,
        rng: &mut RandomNumberGenerator,
    ) -> Result<u32> {
        let candidates: Vec<u32> = self
            .pool(position)
            .iter()
            .copied()
            .filter(|id| lineup.count(*id) == 0)
            .collect();
        candidates.choose(rng).copied().ok_or_else(|| {
            GeneticError::Provider(format!("No unused {:?} left to pick", position))
        })
    }

    /// Swaps one duplicated player at `position` for an unused one.
    fn replace_duplicate(
        &self,
        lineup: &mut Lineup,
        position: Position,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let slot = lineup
            .0
            .iter()
            .position(|&id| self.position_of(id) == Some(position) && lineup.count(id) > 1)
            .ok_or_else(|| {
                GeneticError::Provider(format!(
                    "Unable to find duplicate {:?} players in lineup",
                    position
                ))
            })?;
        lineup.0[slot] = self.random_player_not_in(lineup, position, rng)?;
        Ok(())
    }
}

impl ChromosomeProvider for RosterProvider {
    type Chromosome = Lineup;

    /// Draws random lineups, keeping only those that pass the constraint filter.
    fn generate_initial_population(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<Lineup>> {
        let mut population = Vec::with_capacity(self.population_size);
        let mut attempts = 0;
        while population.len() < self.population_size {
            attempts += 1;
            if attempts > MAX_INITIAL_ATTEMPTS {
                return Err(GeneticError::Provider(
                    "Unable to draw enough valid lineups".to_string(),
                ));
            }

            let mut lineup = Lineup(Vec::with_capacity(SLOTS.len()));
            for position in SLOTS {
                let id = self.random_player_not_in(&lineup, position, rng)?;
                lineup.0.push(id);
            }
            if !self.is_invalid(&lineup) {
                population.push(lineup);
            }
        }
        Ok(population)
    }

    fn evaluate(&self, lineup: &Lineup) -> f64 {
        lineup
            .0
            .iter()
            .filter_map(|id| self.player(*id))
            .map(|player| player.projected_points)
            .sum()
    }

    fn crossover(
        &self,
        parent1: &Lineup,
        parent2: &Lineup,
        _options: &SearchOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Lineup> {
        let cut = rng.gen_range(0..=parent1.0.len());
        let mut child = Lineup(
            parent1.0[..cut]
                .iter()
                .chain(parent2.0.iter().skip(cut))
                .copied()
                .collect(),
        );

        while self.distinct_at(&child, Position::RB) < 2 {
            self.replace_duplicate(&mut child, Position::RB, rng)?;
        }
        while self.distinct_at(&child, Position::WR) < 3 {
            self.replace_duplicate(&mut child, Position::WR, rng)?;
        }

        Ok(child)
    }

    fn mutate(
        &self,
        lineup: Lineup,
        options: &SearchOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Lineup> {
        let mut lineup = lineup;
        for slot in 0..lineup.0.len() {
            if !rng.percent_chance(options.get_mutation_rate()) {
                continue;
            }
            if let Some(position) = self.position_of(lineup.0[slot]) {
                lineup.0[slot] = self.random_player_not_in(&lineup, position, rng)?;
            }
        }
        Ok(lineup)
    }

    fn is_invalid(&self, lineup: &Lineup) -> bool {
        if self.salary(lineup) >= self.salary_cap {
            return true;
        }

        let positions: Vec<Option<Position>> =
            lineup.0.iter().map(|id| self.position_of(*id)).collect();
        for position in [
            Position::QB,
            Position::RB,
            Position::WR,
            Position::TE,
            Position::D,
            Position::K,
        ] {
            let expected = SLOTS.iter().filter(|&&slot| slot == position).count();
            let actual = positions.iter().filter(|&&p| p == Some(position)).count();
            if actual != expected {
                return true;
            }
        }

        if lineup.0.iter().any(|id| lineup.count(*id) > 1) {
            return true;
        }

        let mut per_team: HashMap<&str, usize> = HashMap::new();
        for player in lineup.0.iter().filter_map(|id| self.player(*id)) {
            *per_team.entry(player.team.as_str()).or_default() += 1;
        }
        per_team.values().any(|&count| count > MAX_PER_TEAM)
    }
}

/// A small league: six teams, a few players per position, two stars per
/// skill position that do not all fit under the cap together.
pub fn sample_players() -> Vec<Player> {
    let teams = ["ATL", "BUF", "CHI", "DAL", "GB", "KC"];
    let table: [(Position, &[(u32, f64)]); 6] = [
        (
            Position::QB,
            &[(9_500, 24.0), (8_000, 19.5), (7_000, 16.0), (6_500, 14.0)],
        ),
        (
            Position::RB,
            &[
                (9_000, 21.0),
                (8_500, 19.0),
                (6_500, 13.0),
                (5_500, 10.5),
                (5_000, 9.0),
            ],
        ),
        (
            Position::WR,
            &[
                (9_000, 20.0),
                (8_500, 18.5),
                (7_000, 14.0),
                (6_000, 11.5),
                (5_500, 10.0),
                (5_000, 8.5),
                (4_500, 7.0),
            ],
        ),
        (
            Position::TE,
            &[(7_000, 12.0), (5_500, 8.0), (4_500, 5.5)],
        ),
        (Position::D, &[(5_000, 9.0), (4_500, 7.5), (4_000, 6.0)]),
        (Position::K, &[(5_000, 8.5), (4_800, 8.0), (4_500, 7.0)]),
    ];

    let mut players = Vec::new();
    let mut id = 0u32;
    for (position, entries) in table {
        for &(salary, projected_points) in entries {
            players.push(Player {
                id,
                name: format!("{:?} {}", position, id),
                salary,
                projected_points,
                team: teams[id as usize % teams.len()].to_string(),
                position,
                healthy: true,
            });
            id += 1;
        }
    }
    players
}
