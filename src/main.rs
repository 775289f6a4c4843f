use triple2clangd::{
    FeatureFlags, PRESETS, SourceLayout, build_compile_database, compute_absolute_path,
    debug_println, generated_message, parse_args, parse_target_triple, set_debug_mode,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();
    set_debug_mode(args.debug);

    if args.list_presets {
        for preset in PRESETS {
            let avx2 = if preset.wide_vector { " (avx2)" } else { "" };
            println!("{:<14} {}{}", preset.name, preset.target, avx2);
        }
        return Ok(());
    }

    let (triple, wide_vector) = args.resolve_target()?;
    let target = parse_target_triple(&triple)?;
    if let Some(warning) = target.unknown_arch_warning() {
        eprintln!("{}", warning);
    }

    let features = FeatureFlags {
        wide_vector,
        force_cxx: args.cxx,
    };

    // 目录表在启动时构建一次，之后只读
    let layout = match &args.layout {
        Some(path) => SourceLayout::from_file(path)?,
        None => SourceLayout::default(),
    };

    let root = compute_absolute_path(&args.root)?;
    let output = root.join(&args.output);
    debug_println!("[DEBUG] Project root: {}", root.display());
    debug_println!("[DEBUG] Output: {}", output.display());

    let commands = build_compile_database(&target, features, &layout, &root, &output)?;
    println!("{}", generated_message(&output, commands.len()));

    Ok(())
}
