use lifegrid::grid::Grid;

#[test]
fn underpopulation() -> anyhow::Result<()> {
    let grid: Grid = "...\n.#.\n...".parse()?;

    assert_eq!(grid.next_generation().population(), 0);

    Ok(())
}

#[test]
fn overpopulation() -> anyhow::Result<()> {
    let grid: Grid = ".#.\n###\n.#.".parse()?;

    assert_eq!(grid.neighbor_count(1, 1), 4);
    assert!(!grid.next_generation().is_alive(1, 1));

    Ok(())
}

#[test]
fn birth() -> anyhow::Result<()> {
    let grid: Grid = "#.#\n...\n.#.".parse()?;

    assert_eq!(grid.neighbor_count(1, 1), 3);
    assert!(grid.next_generation().is_alive(1, 1));

    Ok(())
}

#[test]
fn block_is_a_still_life() -> anyhow::Result<()> {
    let grid: Grid = "....\n.##.\n.##.\n....".parse()?;

    assert_eq!(grid.next_generation(), grid);

    Ok(())
}

#[test]
fn block_against_the_edges_is_a_still_life() -> anyhow::Result<()> {
    let grid: Grid = "##\n##".parse()?;

    assert_eq!(grid.next_generation(), grid);

    Ok(())
}

#[test]
fn blinker_has_period_two() -> anyhow::Result<()> {
    let grid: Grid = ".#.\n.#.\n.#.".parse()?;

    let next = grid.next_generation();
    insta::assert_snapshot!(next.to_string(), @r"
    ...
    ###
    ...
    ");

    assert_eq!(next.next_generation(), grid);

    Ok(())
}

#[test]
fn edges_do_not_wrap() -> anyhow::Result<()> {
    let grid: Grid = "###\n...\n...".parse()?;

    insta::assert_snapshot!(grid.next_generation().to_string(), @r"
    .#.
    .#.
    ...
    ");

    Ok(())
}

#[test]
fn glider_moves_diagonally() -> anyhow::Result<()> {
    let glider: Grid = ".#...\n..#..\n###..\n.....\n.....".parse()?;
    let moved: Grid = ".....\n..#..\n...#.\n.###.\n.....".parse()?;

    let mut grid = glider.clone();
    for _ in 0..4 {
        grid = grid.next_generation();
    }

    assert_eq!(grid, moved);

    Ok(())
}
