use std::str::FromStr;

use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicError, DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "Day 2: Cube Conundrum", parsed = GameRecord, part_one = Day02, part_two = Day02
)]
impl super::AdventOfCode2023<2> {}

#[derive(thiserror::Error, Debug)]
enum Day02Error {
    #[error("expected \"Game <id>: <draws>\", found {0:?}")]
    MissingGameHeader(String),

    /// A handful entry is not a count followed by a colour.
    #[error("expected \"<count> <colour>\", found {0:?}")]
    MalformedCubes(String),

    #[error("unknown cube colour {0:?}")]
    UnknownColour(String),

    #[error("integer overflow while totalling {0}")]
    Overflow(&'static str),
}

/*
Each line records one game: an elf draws handfuls of red, green, and blue cubes from a bag,
showing them and putting them back.

    Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green

Handfuls are separated by `;`, and a handful lists `<count> <colour>` entries separated by `,`.
Colours missing from a handful were not drawn. Should a colour be listed twice, the counts add up.
*/

type CubeCount = u32;
type GameId = u32;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Handful {
    red: CubeCount,
    green: CubeCount,
    blue: CubeCount,
}

impl Handful {
    /// Whether this handful could come from a bag holding `bag`.
    fn fits_within(&self, bag: &Self) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// The smallest bag that could produce both handfuls.
    fn union(self, other: Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> Option<CubeCount> {
        [self.red, self.green, self.blue].into_iter().checked_product()
    }
}

impl FromStr for Handful {
    type Err = DynamicError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut handful = Self::default();
        for entry in text.split(',').map(str::trim) {
            let (count, colour) = entry
                .split_once(' ')
                .ok_or_else(|| Day02Error::MalformedCubes(entry.to_owned()))?;
            let count: CubeCount = parse_with_context(count)?;
            let slot = match colour.trim() {
                "red" => &mut handful.red,
                "green" => &mut handful.green,
                "blue" => &mut handful.blue,
                other => return Err(Day02Error::UnknownColour(other.to_owned()).into()),
            };
            *slot = slot
                .checked_add(count)
                .ok_or(Day02Error::Overflow("cube counts"))?;
        }
        Ok(handful)
    }
}

#[derive(Debug)]
struct Game {
    id: GameId,
    handfuls: Vec<Handful>,
}

impl FromStr for Game {
    type Err = DynamicError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let header_error = || Day02Error::MissingGameHeader(line.to_owned());
        let (header, draws) = line.split_once(':').ok_or_else(header_error)?;
        let id = header
            .trim()
            .strip_prefix("Game ")
            .ok_or_else(header_error)?;
        let id: GameId = parse_with_context(id.trim())?;
        let handfuls = draws
            .split(';')
            .map(str::parse::<Handful>)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { id, handfuls })
    }
}

impl Game {
    fn minimum_bag(&self) -> Handful {
        self.handfuls
            .iter()
            .copied()
            .fold(Handful::default(), Handful::union)
    }
}

struct GameRecord(Vec<Game>);

impl ParseData for GameRecord {
    fn parse(input: &str) -> DynamicResult<Self> {
        let games = parse_input_lines(input, |_, line| line.parse::<Game>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(games))
    }
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = GameRecord;
    type Output = GameId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        const BAG: Handful = Handful {
            red: 12,
            green: 13,
            blue: 14,
        };
        let sum = input
            .0
            .iter()
            .filter(|game| game.handfuls.iter().all(|handful| handful.fits_within(&BAG)))
            .map(|game| game.id)
            .checked_sum()
            .ok_or(Day02Error::Overflow("game IDs"))?;
        Ok(sum)
    }
}

impl Solution<PartTwo> for Day02 {
    type Input = GameRecord;
    type Output = CubeCount;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let powers = input
            .0
            .iter()
            .map(|game| game.minimum_bag().power())
            .collect::<Option<Vec<_>>>()
            .ok_or(Day02Error::Overflow("cube set powers"))?;
        let sum = powers
            .into_iter()
            .checked_sum()
            .ok_or(Day02Error::Overflow("cube set powers"))?;
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = GameRecord::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 8);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = GameRecord::parse(EXAMPLE_INPUT)?;
        let result = <Day02 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 2286);
        Ok(())
    }

    #[test]
    fn parses_handful_in_any_order() -> DynamicResult<()> {
        let handful: Handful = " 13 green, 5 blue, 4 red".parse()?;
        assert_eq!(
            handful,
            Handful {
                red: 4,
                green: 13,
                blue: 5
            }
        );
        Ok(())
    }

    #[test]
    fn repeated_colour_adds_up() -> DynamicResult<()> {
        let handful: Handful = "2 red, 3 red".parse()?;
        assert_eq!(handful.red, 5);
        Ok(())
    }

    #[test]
    fn minimum_bag_takes_maximum_per_colour() -> DynamicResult<()> {
        let game: Game = "Game 9: 3 red; 2 green, 1 red; 4 blue".parse()?;
        assert_eq!(game.id, 9);
        assert_eq!(
            game.minimum_bag(),
            Handful {
                red: 3,
                green: 2,
                blue: 4
            }
        );
        assert_eq!(game.minimum_bag().power(), Some(24));
        Ok(())
    }

    #[test]
    fn rejects_unknown_colour() {
        assert!("1 purple".parse::<Handful>().is_err());
    }

    #[test]
    fn reports_failing_line() {
        let input = "Game 1: 1 red\nGame two: 1 red\n";
        let error = GameRecord::parse(input).err().map(|error| error.to_string());
        assert_eq!(error.as_deref(), Some("failure parsing line 2"));
    }
}
