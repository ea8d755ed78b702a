use pokemon_move_learner::{
    LearnerConfig, MenuGrapher, Move, MoveLearner, NewPokemon, PlayerInput, Pokemon,
    PokemonFactory, StandardPokemonFactory, TeachingSession,
};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokemon_move_learner=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match LearnerConfig::load(Path::new("data/move_learner.ron")) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default dialog text: {}", e);
            LearnerConfig::default()
        }
    };
    let mut learner = MoveLearner::with_config(MenuGrapher::new(), config);
    let factory = StandardPokemonFactory;

    // Example 1: a Pokemon with room to spare learns straight away
    println!("=== Learning into a free slot ===");
    let mut squirtle = match factory.new_pokemon(
        NewPokemon::new("SQUIRTLE", 5).with_moves(vec![Move::new("Bide", 10)]),
    ) {
        Ok(pokemon) => pokemon,
        Err(e) => {
            println!("Error creating Squirtle: {}", e);
            return;
        }
    };

    let mut session = learner.start_dialog(&squirtle, Move::new("Peck", 35));
    show_menu(&learner);
    learner.resolve(&mut session, &mut squirtle, PlayerInput::Continue);
    show_menu(&learner);
    println!("{:#}", squirtle);

    println!();

    // Example 2: a full moveset, the player forgets Bite to make room
    println!("=== Forgetting a move ===");
    let mut wartortle = match factory.new_pokemon(NewPokemon::new("WARTORTLE", 22).with_moves(vec![
        Move::new("Bide", 10),
        Move::new("Bite", 25),
        Move::new("Bubble", 30),
        Move::new("Withdraw", 40),
    ])) {
        Ok(pokemon) => pokemon,
        Err(e) => {
            println!("Error creating Wartortle: {}", e);
            return;
        }
    };

    let mut session = learner.start_dialog(&wartortle, Move::new("Water Gun", 25));
    show_menu(&learner);
    for input in [
        PlayerInput::Continue,
        PlayerInput::Accept,
        PlayerInput::Forget { slot: 1 },
    ] {
        learner.resolve(&mut session, &mut wartortle, input);
        show_menu(&learner);
    }
    println!("{:#}", wartortle);
    session.print_debug_with_message("Events:");

    println!();

    // Example 3: direct assignment errors
    println!("=== Direct assignment ===");
    try_add(&learner, &mut wartortle, Move::new("Bubble", 30), 0);
    try_add(&learner, &mut wartortle, Move::new("Tackle", 35), 4);
    try_add(&learner, &mut wartortle, Move::new("Tackle", 35), 3);
    println!("{:#}", wartortle);

    refuse_demo(&mut learner, &factory);
}

fn refuse_demo(learner: &mut MoveLearner<MenuGrapher>, factory: &StandardPokemonFactory) {
    println!();
    println!("=== Refusing a move ===");
    let mut blastoise = match factory.new_pokemon(NewPokemon::new("BLASTOISE", 40).with_moves(vec![
        Move::new("Hydro Pump", 5),
        Move::new("Skull Bash", 15),
        Move::new("Bite", 25),
        Move::new("Withdraw", 40),
    ])) {
        Ok(pokemon) => pokemon,
        Err(e) => {
            println!("Error creating Blastoise: {}", e);
            return;
        }
    };

    let mut session: TeachingSession = learner.start_dialog(&blastoise, Move::new("Rage", 20));
    for input in [PlayerInput::Continue, PlayerInput::Decline] {
        learner.resolve(&mut session, &mut blastoise, input);
        show_menu(learner);
    }
    println!("Final state: {:?}", session.state());
}

fn try_add(learner: &MoveLearner<MenuGrapher>, pokemon: &mut Pokemon, move_: Move, index: i32) {
    let title = move_.title().to_string();
    match learner.add_move(pokemon, move_, index) {
        Ok(Some(old)) => println!("  Slot {}: {} replaced {}", index, title, old),
        Ok(None) => println!("  Slot {}: learned {}", index, title),
        Err(e) => println!("  Slot {}: {} -> {}", index, title, e),
    }
}

fn show_menu(learner: &MoveLearner<MenuGrapher>) {
    if let Some(menu) = learner.menu().active_menu() {
        println!("[{}] {}", menu.name, menu.dialog.text);
        for (i, option) in menu.dialog.options.iter().enumerate() {
            println!("    {}. {}", i + 1, option);
        }
    }
}
