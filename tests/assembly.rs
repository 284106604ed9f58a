use kontig::graph::overlap::is_similar;
use kontig::graph::{find_heads, DeBruijnGraph};
use kontig::kmer::{extract_kmers, read_edges};
use kontig::pipeline::{assemble, assemble_reads, AssemblyConfig, AssemblyOutputs};
use kontig::reads::{ReadId, ReadRegistry};
use std::io::Write;
use tempfile::NamedTempFile;

// every 4-mer occurs once
const TILED: &str = "TCGTAGATGTGCCTTGCTAACGAAAGTATTAAACACGTCC";
// every 7-mer occurs once
const BRIDGED: &str = "GAGGATACCAAATTCCTCCTTATTCAGGACCTAACCTGAGGTAAACCAGGTCTCTCCGCC";

fn config(k: usize) -> AssemblyConfig {
    AssemblyConfig { k, ..AssemblyConfig::default() }
}

fn tile(reference: &str, read_len: usize, step: usize) -> Vec<String> {
    let mut reads: Vec<String> = (0..=reference.len() - read_len)
        .step_by(step)
        .map(|i| reference[i..i + read_len].to_string())
        .collect();
    let last = &reference[reference.len() - read_len..];
    if reads.last().map(String::as_str) != Some(last) {
        reads.push(last.to_string());
    }
    reads
}

#[test]
fn test_kmers_and_edges_of_a_cyclic_read() {
    assert_eq!(extract_kmers("ACGTAC", 3), vec!["ACG", "CGT", "GTA", "TAC"]);
    let pairs: Vec<_> = read_edges("ACGTAC", 3).map(|e| (e.prefix, e.suffix)).collect();
    assert_eq!(pairs, vec![("AC", "CG"), ("CG", "GT"), ("GT", "TA"), ("TA", "AC")]);

    let registry = ReadRegistry::from_reads(["ACGTAC"]);
    let graph = DeBruijnGraph::build(3, &registry).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert!(graph.has_edge("TA", "AC"));
    assert!(find_heads(&graph).is_empty());
}

#[test]
fn test_cyclic_read_yields_no_contigs() {
    let mut registry = ReadRegistry::from_reads(["ACGTAC"]);
    let assembly = assemble(&mut registry, &config(3)).unwrap();
    assert!(assembly.contigs.is_empty());
    assert!(registry.is_unvisited(0));
}

#[test]
fn test_two_overlapping_reads_join() {
    let mut registry = ReadRegistry::from_reads(["ACGT", "CGTA"]);
    let assembly = assemble(&mut registry, &config(3)).unwrap();

    let sequences: Vec<&str> = assembly.contigs.iter().map(|c| c.sequence.as_str()).collect();
    assert_eq!(sequences, vec!["ACGTA"]);
    assert_eq!(registry.unvisited_count(), 0);
}

#[test]
fn test_error_free_tiling_reconstructs_reference() {
    let reads = tile(TILED, 10, 3);

    let mut registry = ReadRegistry::from_reads(reads.iter().cloned());
    let assembly = assemble(&mut registry, &config(5)).unwrap();
    assert_eq!(assembly.contigs.len(), 1);
    assert_eq!(assembly.contigs[0].sequence, TILED);

    // the result does not depend on read order here
    let mut registry = ReadRegistry::from_reads(reads.iter().rev().cloned());
    let assembly = assemble(&mut registry, &config(5)).unwrap();
    assert_eq!(assembly.contigs.len(), 1);
    assert_eq!(assembly.contigs[0].sequence, TILED);
}

#[test]
fn test_fuzzy_overlap_bridges_substitution() {
    let mut reads = tile(BRIDGED, 20, 10);
    // substitution in the overlap of the second read: A -> C
    assert_eq!(&reads[1][1..2], "A");
    reads[1].replace_range(1..2, "C");

    let mut registry = ReadRegistry::from_reads(reads.iter().cloned());
    let assembly = assemble(&mut registry, &config(8)).unwrap();
    assert_eq!(assembly.contigs.len(), 1);
    assert_eq!(assembly.contigs[0].sequence, BRIDGED);
    assert_eq!(assembly.contigs[0].fuzzy_extensions, 1);
    assert_eq!(assembly.stats.reads_consumed, reads.len());

    let exact = AssemblyConfig { fuzzy: false, ..config(8) };
    let mut registry = ReadRegistry::from_reads(reads.iter().cloned());
    let assembly = assemble(&mut registry, &exact).unwrap();
    let sequences: Vec<&str> = assembly.contigs.iter().map(|c| c.sequence.as_str()).collect();
    assert_eq!(sequences.len(), 2);
    assert_eq!(sequences[0], &BRIDGED[..20]);
    assert!(sequences[1].ends_with(&BRIDGED[20..]));
}

#[test]
fn test_fuzzy_overlap_through_a_neighbouring_vertex() {
    let first = BRIDGED[..20].to_string();
    let mut second = BRIDGED[10..30].to_string();
    // substitution inside the shared 7-mer TCCTCCT: C -> A
    assert_eq!(&second[5..6], "C");
    second.replace_range(5..6, "A");

    let mut registry = ReadRegistry::from_reads([first, second]);
    let assembly = assemble(&mut registry, &config(8)).unwrap();

    // the second read only reaches the graph through TCATCCT, 6/7 identical
    // to the first read's trailing label
    assert!(assembly.graph.lookup("TCATCCT").is_some());
    assert!(is_similar("TCATCCT", "TCCTCCT"));
    let exact_label = assembly.graph.lookup("TCCTCCT").unwrap();
    assert_eq!(assembly.graph.vertex(exact_label).unwrap().reads(), &[0]);

    assert_eq!(assembly.contigs.len(), 1);
    assert_eq!(assembly.contigs[0].sequence, &BRIDGED[..30]);
    assert_eq!(assembly.contigs[0].read_path, vec![0, 1]);
    assert_eq!(assembly.contigs[0].fuzzy_extensions, 1);
}

#[test]
fn test_no_read_is_consumed_twice() {
    let mut reads = tile(BRIDGED, 20, 4);
    reads.extend(tile(TILED, 12, 2));
    reads[3].replace_range(5..6, "T");

    let mut registry = ReadRegistry::from_reads(reads.iter().cloned());
    let assembly = assemble(&mut registry, &config(6)).unwrap();

    let mut consumed: Vec<ReadId> = assembly
        .contigs
        .iter()
        .flat_map(|c| c.read_path.iter().copied())
        .collect();
    let total = consumed.len();
    consumed.sort_unstable();
    consumed.dedup();
    assert_eq!(consumed.len(), total);
    assert_eq!(registry.len() - registry.unvisited_count(), total);
    assert!(assembly.contigs.iter().all(|c| !c.sequence.is_empty()));
}

#[test]
fn test_assemble_reads_writes_outputs() {
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, ">reads").unwrap();
    writeln!(input, "acgt").unwrap();
    writeln!(input, "CGTA").unwrap();
    writeln!(input, "CGTA").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let outputs = AssemblyOutputs {
        contigs: dir.path().join("contigs.txt").to_str().unwrap().to_string(),
        edges: Some(dir.path().join("edges.txt").to_str().unwrap().to_string()),
        stats_json: Some(dir.path().join("stats.json").to_str().unwrap().to_string()),
    };

    let stats = assemble_reads(input.path().to_str().unwrap(), &outputs, &config(3)).unwrap();
    assert_eq!(stats.contigs, 1);
    assert_eq!(stats.duplicate_reads, 1);
    assert_eq!(stats.reads_loaded, 2);

    let contigs = std::fs::read_to_string(&outputs.contigs).unwrap();
    assert_eq!(contigs, "ACGTA\n");

    let edges = std::fs::read_to_string(outputs.edges.as_ref().unwrap()).unwrap();
    assert_eq!(edges, "AC -> CG\nCG -> GT\nGT -> TA\n");

    let raw = std::fs::read_to_string(outputs.stats_json.as_ref().unwrap()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["contigs"], 1);
    assert_eq!(json["n50"], 5);
}
