use midsquare::MidSquare;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = if args.len() > 1 {
        args[1].parse().unwrap_or(123)
    } else {
        123
    };

    let width: u32 = if args.len() > 2 {
        args[2].parse().unwrap_or(4)
    } else {
        4
    };

    let count: usize = if args.len() > 3 {
        args[3].parse().unwrap_or(20)
    } else {
        20
    };

    let mut gen = match MidSquare::new(seed, width) {
        Ok(gen) => gen,
        Err(e) => {
            eprintln!("Bad seed: {}", e);
            std::process::exit(1);
        }
    };

    for _ in 0..count {
        println!("{}", gen.next_value());
    }
}
