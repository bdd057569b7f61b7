//! Sample data set for the demo binary: a small league table.

use crate::model::Column;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// One team's row in the league table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Team name.
    pub team: String,
    /// Matches played.
    pub played: u32,
    /// Matches won.
    pub won: u32,
    /// Matches drawn.
    pub drawn: u32,
    /// Matches lost.
    pub lost: u32,
    /// Goals scored minus goals conceded.
    pub goal_difference: i32,
    /// League points.
    pub points: u32,
}

impl Standing {
    fn new(team: &str, won: u32, drawn: u32, lost: u32, goal_difference: i32) -> Self {
        Self {
            team: team.to_string(),
            played: won + drawn + lost,
            won,
            drawn,
            lost,
            goal_difference,
            points: won * 3 + drawn,
        }
    }
}

/// The demo rows, in insertion order (not ranked).
pub fn standings() -> Vec<Standing> {
    vec![
        Standing::new("Harbour City", 7, 2, 3, 9),
        Standing::new("Northgate", 8, 1, 3, 12),
        Standing::new("Ashford Rovers", 5, 4, 3, 2),
        Standing::new("Millbrook", 3, 3, 6, -7),
        Standing::new("Eastwick Athletic", 7, 2, 3, 4),
        Standing::new("Riverside", 2, 5, 5, -6),
        Standing::new("Kingsbridge", 9, 1, 2, 15),
        Standing::new("Westfield United", 4, 2, 6, -3),
        Standing::new("Oakham Town", 1, 3, 8, -14),
        Standing::new("Port Lewis", 6, 0, 6, 0),
        Standing::new("Stonebury", 5, 3, 4, 1),
        Standing::new("Fenmoor", 2, 2, 8, -13),
    ]
}

/// Column set over [`Standing`].
///
/// Numeric columns carry explicit comparators except "W", which is left on
/// the default text ordering.
pub fn columns() -> Vec<Column<Standing>> {
    vec![
        Column::new("team", "Team", |s: &Standing| s.team.clone())
            .with_width(20)
            .with_min_width(8)
            .with_max_width(40),
        Column::new("played", "P", |s: &Standing| s.played.to_string())
            .with_width(4)
            .with_max_width(8)
            .with_comparator(|a: &Standing, b: &Standing| a.played.cmp(&b.played)),
        Column::new("won", "W", |s: &Standing| s.won.to_string())
            .with_width(4)
            .with_max_width(8),
        Column::new("drawn", "D", |s: &Standing| s.drawn.to_string())
            .with_width(4)
            .with_max_width(8)
            .with_comparator(|a: &Standing, b: &Standing| a.drawn.cmp(&b.drawn)),
        Column::new("lost", "L", |s: &Standing| s.lost.to_string())
            .with_width(4)
            .with_max_width(8)
            .with_comparator(|a: &Standing, b: &Standing| a.lost.cmp(&b.lost)),
        Column::new("gd", "GD", |s: &Standing| format!("{:+}", s.goal_difference))
            .with_width(5)
            .with_max_width(10)
            .with_comparator(|a: &Standing, b: &Standing| {
                a.goal_difference.cmp(&b.goal_difference)
            })
            .with_renderer(render_goal_difference),
        Column::new("pts", "Pts", |s: &Standing| s.points.to_string())
            .with_width(5)
            .with_resizable(false)
            .with_comparator(|a: &Standing, b: &Standing| a.points.cmp(&b.points)),
    ]
}

fn render_goal_difference(standing: &Standing) -> Line<'static> {
    let color = match standing.goal_difference {
        d if d > 0 => Color::Green,
        d if d < 0 => Color::Red,
        _ => Color::Gray,
    };
    Line::from(Span::styled(
        format!("{:+}", standing.goal_difference),
        Style::default().fg(color),
    ))
}
