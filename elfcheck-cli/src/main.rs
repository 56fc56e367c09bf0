use std::process::ExitCode;

use elfcheck::{flagset::FlagSet, Elf, ElfValue, SegmentFlag};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let [_, filename] = args.as_slice() else {
        let program = args.first().map_or("elfcheck", String::as_str);
        eprintln!("usage: {program} <elf-file>");
        return ExitCode::from(2);
    };

    match Elf::open(filename) {
        Ok(elf) => {
            log_summary(&elf);
            println!("success");
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn log_summary(elf: &Elf) {
    let header = elf.header();
    let ident = header.ident();

    log::info!(
        "{}-bit {:?} endian, OS/ABI {:?} (ABI version {})",
        ident.class().address_size() * 8,
        ident.endianness(),
        ident.osabi(),
        ident.abiversion()
    );
    log::info!(
        "type {}, machine {} ({:?}), entry 0x{:x}",
        match header.kind() {
            ElfValue::Known(kind) => format!("{kind:?}"),
            ElfValue::OsSpecific(value) => format!("OS-specific 0x{value:04x}"),
            ElfValue::ProcessorSpecific(value) => format!("processor-specific 0x{value:04x}"),
        },
        header.machine().symbol(),
        header.machine(),
        header.entry()
    );
    log::info!(
        "{} program headers at {} ({} bytes each), {} section headers at {}",
        header.phnum(),
        header.phoff(),
        header.phentsize(),
        header.shnum(),
        header.shoff()
    );

    for (index, segment) in elf.program_headers().iter().enumerate() {
        let kind = match segment.kind() {
            ElfValue::Known(kind) => format!("{kind:?}"),
            other => format!("0x{:x}", other.to_u32()),
        };

        let (Some(offset), Some(vaddr), Some(filesz), Some(memsz), Some(flags)) = (
            segment.offset(),
            segment.vaddr(),
            segment.filesz(),
            segment.memsz(),
            segment.flags(),
        ) else {
            log::info!("  [{index}] {kind: <10} (truncated entry)");
            continue;
        };

        log::info!(
            "  [{index}] {kind: <10} offset 0x{offset:x} vaddr 0x{vaddr:x} filesz 0x{filesz:x} memsz 0x{memsz:x} {}{}{}",
            flag_char(flags, SegmentFlag::Read, 'R'),
            flag_char(flags, SegmentFlag::Write, 'W'),
            flag_char(flags, SegmentFlag::Execute, 'E'),
        );
    }
}

fn flag_char(flags: FlagSet<SegmentFlag>, flag: SegmentFlag, c: char) -> char {
    if flags.contains(flag) {
        c
    } else {
        ' '
    }
}
