//! Terminal front end: looks records up through the fetch layer and
//! renders the core's layout/outcome records as plain text.

use pokefinder::api::{Fetched, PokeApiClient, PokemonBundle};
use pokefinder::battle::{resolve, BattleOutcome, Side};
use pokefinder::evolution::{parse_stages, plan_rows, LayoutRow, RowItem};
use pokefinder::PokefinderError;
use schema::{stat_label, Ability, Pokemon};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = match args.iter().map(String::as_str).collect::<Vec<_>>()[..] {
        [name] => show_pokemon(name).await,
        ["vs", first, second] => show_battle(first, second).await,
        ["ability", name] => show_ability(name).await,
        _ => {
            eprintln!("Usage:");
            eprintln!("  pokefinder <name-or-id>           look up a Pokemon");
            eprintln!("  pokefinder vs <first> <second>    battle two Pokemon");
            eprintln!("  pokefinder ability <name-or-id>   look up an ability");
            std::process::exit(2);
        }
    };

    if let Err(err) = outcome {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn show_pokemon(query: &str) -> Result<(), PokefinderError> {
    let mut client = PokeApiClient::new();
    let Fetched { data, from_cache } = client.get_pokemon(query).await?;
    let PokemonBundle {
        pokemon,
        evolution_chain_url,
    } = data;

    print_card(&pokemon, from_cache);

    if let Some(url) = evolution_chain_url {
        let chain = client.get_evolution_chain(&url).await?;
        let stages = parse_stages(&chain.data)?;
        let rows = plan_rows(&stages, &pokemon.name);
        println!("\nCadena de evolución:");
        for row in &rows {
            println!("  {}", render_row(row));
        }
    } else {
        println!("\nNo hay datos de evolución disponibles.");
    }

    Ok(())
}

async fn show_battle(first: &str, second: &str) -> Result<(), PokefinderError> {
    let mut client = PokeApiClient::new();
    let first = client.get_pokemon(first).await?.data.pokemon;
    let second = client.get_pokemon(second).await?.data.pokemon;

    let outcome = resolve(&first, &second)?;
    print_battle(&outcome);
    Ok(())
}

async fn show_ability(query: &str) -> Result<(), PokefinderError> {
    let mut client = PokeApiClient::new();
    let Fetched { data, from_cache } = client.get_ability(query).await?;
    print_ability(&data, from_cache);
    Ok(())
}

fn source_badge(from_cache: bool) -> &'static str {
    if from_cache {
        "DESDE CACHÉ"
    } else {
        "DESDE API"
    }
}

fn print_card(pokemon: &Pokemon, from_cache: bool) {
    println!(
        "#{} {}  [{}]",
        pokemon.id,
        pokemon.name.to_uppercase(),
        source_badge(from_cache)
    );

    let types: Vec<String> = pokemon
        .types
        .iter()
        .map(|type_| type_.to_string().to_uppercase())
        .collect();
    println!("Tipos: {}", types.join(" / "));

    let abilities: Vec<String> = pokemon
        .abilities
        .iter()
        .map(|ability| {
            let name = ability.name.replace('-', " ").to_uppercase();
            if ability.is_hidden {
                format!("{} (Oculta)", name)
            } else {
                name
            }
        })
        .collect();
    println!("Habilidades: {}", abilities.join(", "));

    println!("Stats:");
    for entry in &pokemon.stats {
        println!("  {:<8} {:>3}", stat_label(&entry.name), entry.base_stat);
    }
}

fn render_row(row: &LayoutRow) -> String {
    let mut parts = Vec::new();
    for item in &row.items {
        match item {
            RowItem::Member(member) => {
                let name = member.name.to_uppercase();
                if member.current {
                    parts.push(format!("[{}]", name));
                } else {
                    parts.push(name);
                }
            }
            RowItem::Arrow { label: Some(label) } => parts.push(format!("→ ({})", label)),
            RowItem::Arrow { label: None } => parts.push("→".to_string()),
        }
    }
    parts.join(" ")
}

fn print_battle(outcome: &BattleOutcome) {
    println!("⚔ RESULTADO DE LA BATALLA ⚔\n");

    for (side, marker) in [
        (&outcome.first, Side::First),
        (&outcome.second, Side::Second),
    ] {
        let badge = if outcome.winner == marker {
            "GANADOR"
        } else {
            "PERDEDOR"
        };
        println!(
            "{:<10} #{} {}: {} pts",
            badge,
            side.pokemon.id,
            side.pokemon.name.to_uppercase(),
            side.score.round()
        );
    }

    println!("\nVentajas de tipo:");
    if outcome.advantages.is_empty() {
        println!("  Sin ventajas de tipo significativas.");
    } else {
        for advantage in &outcome.advantages {
            let message = if advantage.effective {
                "Tipos son efectivos"
            } else {
                "Tipos no son muy efectivos"
            };
            println!(
                "  {} vs {}: ×{:.2} - {}",
                advantage.attacker.to_uppercase(),
                advantage.defender.to_uppercase(),
                advantage.multiplier,
                message
            );
        }
    }

    println!("\nComparación de stats:");
    for comparison in &outcome.stat_comparison {
        let (left, right) = match comparison.higher {
            Some(Side::First) => ("*", " "),
            Some(Side::Second) => (" ", "*"),
            None => (" ", " "),
        };
        println!(
            "  {:>3}{} {:<8} {}{:<3}",
            comparison.first, left, comparison.label, right, comparison.second
        );
    }

    println!("\nCálculo del puntaje:");
    println!(
        "  Stats base: {} | {}",
        outcome.first.stat_total, outcome.second.stat_total
    );
    println!(
        "  Multiplicador: ×{:.2} | ×{:.2}",
        outcome.first.multiplier, outcome.second.multiplier
    );
    println!(
        "  Puntaje final: {} | {}",
        outcome.first.score.round(),
        outcome.second.score.round()
    );
}

fn print_ability(ability: &Ability, from_cache: bool) {
    println!(
        "✨ {}  #{}  [{}]",
        ability.name.replace('-', " ").to_uppercase(),
        ability.id,
        source_badge(from_cache)
    );
    match &ability.effect {
        Some(effect) => println!("\n{}", effect),
        None => println!("\nDescripción no disponible."),
    }

    println!("\nPokémon con esta habilidad ({}):", ability.holders.len());
    for holder in &ability.holders {
        let hidden = if holder.is_hidden { " (Oculta)" } else { "" };
        println!("  {}{}", holder.name.to_uppercase(), hidden);
    }
}
