use log_skeleton::{
    import_txt_file, import_xes_file, mine_log_skeleton, TraceLog, TxtImportOptions,
    XESImportOptions,
};
use std::collections::BTreeSet;
use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!(
            "Usage: {} <path_to_log (.txt, .xes or .xes.gz)> [output_json_path]",
            args[0]
        );
        std::process::exit(1);
    }

    let input_path = PathBuf::from(&args[1]);
    println!("Importing trace log from {:?}", input_path);
    let log: TraceLog = if input_path.extension().is_some_and(|e| e == "txt") {
        import_txt_file(&input_path, &TxtImportOptions::default())?
    } else {
        import_xes_file(&input_path, &XESImportOptions::default())?
    };
    println!(
        "Imported {} distinct traces ({} cases) with {} activities.",
        log.len(),
        log.total_frequency(),
        log.labels().len()
    );

    println!("Discovering log skeleton...");
    let skeleton = mine_log_skeleton(&log, &BTreeSet::new(), &BTreeSet::new());
    let relationships = &skeleton.relationships;
    println!("Equivalence: {:?}", relationships.equivalence);
    println!("Never-together: {:?}", relationships.never_together);
    println!("Always-after: {:?}", relationships.always_after);
    println!("Always-before: {:?}", relationships.always_before);

    if let Some(output) = args.get(2) {
        let output_path = PathBuf::from(output);
        println!("Exporting log skeleton to {:?}", output_path);
        std::fs::write(&output_path, skeleton.to_json()?)?;
    }

    println!("Done!");
    Ok(())
}
