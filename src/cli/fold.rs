use clap::Args;

use atomvm::tree;
use atomvm::Value;

#[derive(Args)]
pub struct FoldArgs {
    /// Atoms to fold, left to right
    pub atoms: Vec<String>,
    /// Also print the tree height and atom count
    #[arg(long)]
    pub stats: bool,
}

pub fn cmd_fold(args: FoldArgs) {
    let values: Vec<Value> = args.atoms.iter().map(|a| Value::from_literal(a)).collect();
    match tree::build(values) {
        Some(noun) => {
            println!("{}", noun);
            if args.stats {
                eprintln!("atoms: {}, height: {}", noun.leaf_count(), noun.height());
            }
        }
        None => println!("{}", atomvm::value::EMPTY),
    }
}
