use molgraph::parse_smiles;

fn main() {
    let input = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: molgraph <smiles>");
        std::process::exit(2)
    });

    match parse_smiles(&input) {
        Ok(mol) => {
            println!("{} atoms, {} bonds", mol.size(), mol.bond_count());
            for (index, atom) in mol.atoms().iter().enumerate() {
                let neighbors: Vec<String> = mol
                    .neighbors(index)
                    .map(|n| format!("{n}"))
                    .collect();
                println!(
                    "{index:>4} {:<2} charge {:+} -> [{}]",
                    atom.symbol,
                    atom.charge,
                    neighbors.join(", ")
                );
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
