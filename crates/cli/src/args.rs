//! Goal, seed and canonicalizer names accepted on the command line.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

use compass::api::{
    four_circle_frontier, three_circle_frontier, Canonicalizer, CircleCount, ContainsCircle,
    ContainsPoints, FrameTable, Goal, Point, RegularPolygon, Seed,
};

/// `--canon` choices; `auto` follows the goal's symmetry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CanonArg {
    #[default]
    Auto,
    Pairwise,
    Hexagonal,
    Anchored,
}

impl CanonArg {
    pub fn canonicalizer(self) -> Option<Canonicalizer> {
        match self {
            CanonArg::Auto => None,
            CanonArg::Pairwise => Some(Canonicalizer::Pairwise),
            CanonArg::Hexagonal => Some(Canonicalizer::FixedTable(FrameTable::hexagonal())),
            CanonArg::Anchored => Some(Canonicalizer::Anchored),
        }
    }
}

/// `circles:N`, `square`, `pentagon`, `napoleon` or `points:x,y;x,y;…`.
pub fn parse_goal(text: &str) -> Result<Goal> {
    let (head, rest) = match text.split_once(':') {
        Some((h, r)) => (h.trim(), Some(r)),
        None => (text.trim(), None),
    };
    let goal: Goal = match (head, rest) {
        ("square", None) => RegularPolygon::square().into(),
        ("pentagon", None) => RegularPolygon::pentagon().into(),
        ("napoleon", None) => ContainsCircle::napoleon().into(),
        ("circles", Some(n)) => {
            let n: usize = n
                .trim()
                .parse()
                .with_context(|| format!("circle count in goal {text:?}"))?;
            CircleCount::new(n).into()
        }
        ("points", Some(list)) => ContainsPoints::new(parse_points(list)?).into(),
        _ => bail!("unknown goal {text:?} (expected circles:N, square, pentagon, napoleon or points:x,y;...)"),
    };
    Ok(goal)
}

fn parse_points(list: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for item in list.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (x, y) = item
            .split_once(',')
            .with_context(|| format!("point {item:?} is not x,y"))?;
        let x: f64 = x.trim().parse().with_context(|| format!("x in {item:?}"))?;
        let y: f64 = y.trim().parse().with_context(|| format!("y in {item:?}"))?;
        points.push(Point::new(x, y));
    }
    if points.is_empty() {
        bail!("points goal needs at least one point");
    }
    Ok(points)
}

/// `unit`, `symmetric`, `unit-circle`, `frontier3` or `frontier4`.
pub fn parse_seed(name: &str) -> Result<Vec<Seed>> {
    Ok(match name {
        "unit" => vec![Seed::unit_pair()],
        "symmetric" => vec![Seed::symmetric_pair()],
        "unit-circle" => vec![Seed::unit_circle()],
        "frontier3" => three_circle_frontier(),
        "frontier4" => four_circle_frontier(),
        _ => bail!("unknown seed {name:?} (expected unit, symmetric, unit-circle, frontier3 or frontier4)"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass::api::GoalPredicate;

    #[test]
    fn goals_parse_by_name() {
        assert_eq!(parse_goal("circles:3").unwrap(), Goal::CircleCount(CircleCount::new(3)));
        assert_eq!(parse_goal("square").unwrap(), Goal::RegularPolygon(RegularPolygon::square()));
        assert_eq!(parse_goal(" pentagon ").unwrap(), Goal::RegularPolygon(RegularPolygon::pentagon()));
        assert_eq!(parse_goal("napoleon").unwrap(), Goal::ContainsCircle(ContainsCircle::napoleon()));
    }

    #[test]
    fn points_goal_reads_semicolon_list() {
        let goal = parse_goal("points:-1,0; 0,1;0,-1;").unwrap();
        let expected = ContainsPoints::new(vec![
            Point::new(-1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, -1.0),
        ]);
        assert_eq!(goal, Goal::ContainsPoints(expected));
        assert!(goal.is_satisfied(
            &[Point::new(0.0, -1.0), Point::new(0.0, 1.0), Point::new(-1.0, 0.0)],
            &[]
        ));
    }

    #[test]
    fn malformed_goals_are_rejected() {
        for bad in ["", "circles", "circles:x", "points:", "points:1;2", "hexagon", "square:4"] {
            assert!(parse_goal(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn seeds_parse_by_name() {
        assert_eq!(parse_seed("unit").unwrap(), vec![Seed::unit_pair()]);
        assert_eq!(parse_seed("unit-circle").unwrap()[0].circles.len(), 1);
        assert_eq!(parse_seed("frontier3").unwrap().len(), 2);
        assert_eq!(parse_seed("frontier4").unwrap().len(), 10);
        assert!(parse_seed("frontier5").is_err());
    }

    #[test]
    fn canon_arg_maps_to_strategies() {
        assert_eq!(CanonArg::Auto.canonicalizer(), None);
        assert_eq!(CanonArg::Anchored.canonicalizer(), Some(Canonicalizer::Anchored));
        assert_eq!(
            CanonArg::Hexagonal.canonicalizer().map(|c| c.name()),
            Some("fixed-table")
        );
    }
}
