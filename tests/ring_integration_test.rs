use boxing_ring::{
    BoxerRoster, BoxerStats, BoxingError, InMemoryBoxerRepository, Ring,
    SeededRandom, SharedRing,
};
use std::sync::{Arc, Mutex};
use std::thread;

fn fixed(draw: f64) -> impl Fn() -> f64 + Send + Sync {
    move || draw
}

fn roster_with_ann_and_bob() -> InMemoryBoxerRepository {
    let mut repo = InMemoryBoxerRepository::new();
    repo.create_boxer("Ann", 180, 68, 70.0, 30).unwrap();
    repo.create_boxer("Bob", 180, 70, 70.0, 30).unwrap();
    repo
}

#[test]
fn test_equal_boxers_split_on_the_draw() {
    let mut repo = roster_with_ann_and_bob();
    let ann = repo.get_boxer_by_name("Ann").unwrap();
    let bob = repo.get_boxer_by_name("Bob").unwrap();

    // Below one half the first entrant wins
    let mut ring = Ring::new();
    ring.enter(ann.clone()).unwrap();
    ring.enter(bob.clone()).unwrap();
    let bout = ring.fight_with_report(&mut repo, &fixed(0.4)).unwrap();
    assert_eq!(bout.skill_1, 547.0);
    assert_eq!(bout.skill_2, 547.0);
    assert_eq!(bout.delta, 0.0);
    assert_eq!(bout.probability, 0.5);
    assert_eq!(bout.winner.name(), "Ann");
    assert!(ring.is_empty());

    // At or above one half the second entrant wins
    ring.enter(ann.clone()).unwrap();
    ring.enter(bob.clone()).unwrap();
    let winner = ring.fight(&mut repo, &fixed(0.6)).unwrap();
    assert_eq!(winner, "Bob");
    assert!(ring.is_empty());

    // One win each
    assert_eq!(
        repo.get_stats(ann.id()).unwrap(),
        BoxerStats { fights: 2, wins: 1 }
    );
    assert_eq!(
        repo.get_stats(bob.id()).unwrap(),
        BoxerStats { fights: 2, wins: 1 }
    );
}

#[test]
fn test_zero_draw_picks_first_entrant_even_when_weaker() {
    let mut repo = InMemoryBoxerRepository::new();
    let weak = repo.create_boxer("Al", 125, 62, 60.0, 19).unwrap();
    let strong = repo.create_boxer("Maximilian", 240, 78, 84.0, 29).unwrap();

    let mut ring = Ring::new();
    ring.enter_by_id(&repo, weak.id()).unwrap();
    ring.enter_by_id(&repo, strong.id()).unwrap();

    let winner = ring.fight(&mut repo, &fixed(0.0)).unwrap();
    assert_eq!(winner, "Al");
    assert_eq!(repo.get_stats(weak.id()).unwrap(), BoxerStats { fights: 1, wins: 1 });
    assert_eq!(repo.get_stats(strong.id()).unwrap(), BoxerStats { fights: 1, wins: 0 });
}

#[test]
fn test_near_one_draw_needs_saturated_probability() {
    let mut repo = InMemoryBoxerRepository::new();
    let close_a = repo.create_boxer("Ann", 180, 68, 71.0, 30).unwrap();
    let close_b = repo.create_boxer("Bob", 180, 68, 70.0, 30).unwrap();
    let giant = repo.create_boxer("Heavyweight", 250, 80, 80.0, 30).unwrap();

    let mut ring = Ring::new();

    // Gap of 0.1 is nowhere near enough
    ring.enter(close_a.clone()).unwrap();
    ring.enter(close_b.clone()).unwrap();
    assert_eq!(ring.fight(&mut repo, &fixed(0.999999)).unwrap(), "Bob");

    // A gap of thousands saturates p at 1.0 in favour of slot one
    ring.enter(giant.clone()).unwrap();
    ring.enter(close_b.clone()).unwrap();
    assert_eq!(
        ring.fight(&mut repo, &fixed(0.999999)).unwrap(),
        "Heavyweight"
    );
}

#[test]
fn test_fight_without_two_boxers_changes_nothing() {
    let mut repo = roster_with_ann_and_bob();
    let ann = repo.get_boxer_by_name("Ann").unwrap();

    let mut ring = Ring::new();
    let err = ring.fight(&mut repo, &fixed(0.5)).unwrap_err();
    assert!(matches!(err, BoxingError::NotEnoughBoxers { present: 0 }));

    ring.enter(ann.clone()).unwrap();
    let err = ring.fight(&mut repo, &fixed(0.5)).unwrap_err();
    assert!(matches!(err, BoxingError::NotEnoughBoxers { present: 1 }));

    assert_eq!(ring.len(), 1);
    assert_eq!(repo.get_stats(ann.id()).unwrap(), BoxerStats::default());
}

#[test]
fn test_deleted_boxer_fails_stats_and_keeps_ring() {
    let mut repo = roster_with_ann_and_bob();
    let ann = repo.get_boxer_by_name("Ann").unwrap();
    let bob = repo.get_boxer_by_name("Bob").unwrap();

    let mut ring = Ring::new();
    ring.enter(ann.clone()).unwrap();
    ring.enter(bob.clone()).unwrap();

    // Bob leaves the roster while waiting in the ring
    repo.delete_boxer(bob.id()).unwrap();

    let err = ring.fight(&mut repo, &fixed(0.1)).unwrap_err();
    assert!(matches!(err, BoxingError::Repository(_)));
    assert_eq!(ring.len(), 2);

    // The winner's update had already gone through
    assert_eq!(repo.get_stats(ann.id()).unwrap(), BoxerStats { fights: 1, wins: 1 });
}

#[test]
fn test_seeded_fights_are_reproducible() {
    let run = |seed: u64| {
        let mut repo = roster_with_ann_and_bob();
        let ann = repo.get_boxer_by_name("Ann").unwrap();
        let bob = repo.get_boxer_by_name("Bob").unwrap();
        let random = SeededRandom::new(seed);
        let mut ring = Ring::new();
        (0..20)
            .map(|_| {
                ring.enter(ann.clone()).unwrap();
                ring.enter(bob.clone()).unwrap();
                ring.fight(&mut repo, &random).unwrap()
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(11), run(11));
}

#[test]
fn test_shared_ring_never_exceeds_capacity() {
    let mut repo = InMemoryBoxerRepository::new();
    let boxers: Vec<_> = (0..8)
        .map(|i| {
            repo.create_boxer(&format!("Boxer {}", i), 150, 68, 70.0, 28)
                .unwrap()
        })
        .collect();

    let ring = Arc::new(SharedRing::new());
    let accepted = Arc::new(Mutex::new(0));

    let handles: Vec<_> = boxers
        .into_iter()
        .map(|boxer| {
            let ring = Arc::clone(&ring);
            let accepted = Arc::clone(&accepted);
            thread::spawn(move || {
                if ring.enter(boxer).is_ok() {
                    *accepted.lock().unwrap() += 1;
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(*accepted.lock().unwrap(), 2);
    assert_eq!(ring.boxers().unwrap().len(), 2);

    ring.fight(&mut repo, &fixed(0.3)).unwrap();
    assert!(ring.boxers().unwrap().is_empty());
}
