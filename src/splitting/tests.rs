use std::str::FromStr;

use polars::prelude::*;

use crate::data_structs::class::SampleClass;
use crate::data_structs::sample::{
    DomainSample,
    SampleCollection,
};

fn domain_sample(
    contig_id: &str,
    gene_starts: &[i64],
) -> DomainSample {
    let n = gene_starts.len();
    let domains = df!(
        "contig_id" => vec![contig_id.to_string(); n],
        "protein_id" => (0..n).map(|i| format!("{}_p{}", contig_id, i)).collect::<Vec<_>>(),
        "gene_start" => gene_starts.to_vec(),
        "gene_end" => gene_starts.iter().map(|s| s + 90).collect::<Vec<_>>(),
        "gene_strand" => vec!["+".to_string(); n],
        "pfam_id" => (0..n).map(|i| format!("PF{:05}", i)).collect::<Vec<_>>(),
        "evalue" => vec![1e-5f64; n],
        "bitscore" => vec![55.0f64; n],
        "in_cluster" => vec![0i64; n],
    )
    .unwrap();
    DomainSample::new(contig_id, domains)
}

fn labelled_collection(labels: &[&str]) -> SampleCollection {
    let samples = labels
        .iter()
        .enumerate()
        .map(|(i, _)| domain_sample(&format!("CONTIG_{}", i), &[i as i64 * 10]))
        .collect();
    let classes = labels
        .iter()
        .map(|label| SampleClass::from_str(label).unwrap())
        .collect();
    SampleCollection::try_new(samples, classes).unwrap()
}

fn unlabelled_collection(n: usize) -> SampleCollection {
    let samples = (0..n)
        .map(|i| domain_sample(&format!("CONTIG_{}", i), &[i as i64 * 10]))
        .collect();
    SampleCollection::unlabelled(samples)
}

mod kfold_tests {
    use itertools::Itertools;

    use super::*;
    use crate::splitting::kfold::KFoldSplitter;
    use crate::splitting::{
        SampleSplitter,
        SplitError,
    };

    #[test]
    fn test_folds_cover_all_indices_exactly_once() {
        let collection = unlabelled_collection(10);
        let splits = KFoldSplitter::new(3, 0).split(&collection).unwrap();
        assert_eq!(splits.len(), 3);

        let all_test: Vec<usize> = splits
            .iter()
            .flat_map(|split| split.test.iter().copied())
            .sorted()
            .collect();
        assert_eq!(all_test, (0..10).collect::<Vec<_>>());

        // First fold takes the remainder.
        assert_eq!(splits[0].test.len(), 4);
        assert_eq!(splits[1].test.len(), 3);
        assert_eq!(splits[2].test.len(), 3);
    }

    #[test]
    fn test_train_is_complement_of_test() {
        let collection = unlabelled_collection(7);
        let splits = KFoldSplitter::new(2, 42).split(&collection).unwrap();
        for split in &splits {
            let mut combined: Vec<usize> = split
                .train
                .iter()
                .chain(split.test.iter())
                .copied()
                .collect();
            combined.sort_unstable();
            assert_eq!(combined, (0..7).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_every_sample_in_all_but_one_train() {
        let collection = unlabelled_collection(9);
        let splits = KFoldSplitter::new(3, 1).split(&collection).unwrap();
        for idx in 0..9 {
            let train_occurrences = splits
                .iter()
                .filter(|split| split.train.contains(&idx))
                .count();
            assert_eq!(train_occurrences, 2);
        }
    }

    #[test]
    fn test_fold_metadata() {
        let collection = unlabelled_collection(4);
        let splits = KFoldSplitter::new(2, 0).split(&collection).unwrap();
        assert_eq!(splits[0].meta.name, "fold1");
        assert_eq!(splits[0].meta.label, "Fold 1");
        assert_eq!(splits[1].meta.group, "fold2");
    }

    #[test]
    fn test_incompatible_fold_count() {
        let collection = unlabelled_collection(3);
        assert!(matches!(
            KFoldSplitter::new(1, 0).split(&collection),
            Err(SplitError::Configuration(_))
        ));
        assert!(matches!(
            KFoldSplitter::new(4, 0).split(&collection),
            Err(SplitError::Configuration(_))
        ));
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let collection = unlabelled_collection(12);
        let splits_a = KFoldSplitter::new(5, 7).split(&collection).unwrap();
        let splits_b = KFoldSplitter::new(5, 7).split(&collection).unwrap();
        for (a, b) in splits_a.iter().zip(splits_b.iter()) {
            assert_eq!(a.train, b.train);
            assert_eq!(a.test, b.test);
        }
    }
}

mod lco_tests {
    use super::*;
    use crate::splitting::lco::{
        select_lco_classes,
        LeaveClassOutSplitter,
    };
    use crate::splitting::{
        SampleSplitter,
        SplitError,
    };

    const SCENARIO_LABELS: &[&str] = &["_neg_", "_neg_", "classX", "classX", "classY"];

    fn scenario_splitter(pos_test_count: Option<usize>) -> LeaveClassOutSplitter {
        LeaveClassOutSplitter::try_new(
            vec!["classX".to_string(), "classY".to_string()],
            0.5,
            pos_test_count,
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_select_lco_classes() {
        let classes = [
            "Polyketide",
            "NRP;Polyketide",
            "Other",
            "?",
            "Nucleoside",
            "Terpene",
            "Polyketide",
            "RiPP",
        ];
        assert_eq!(select_lco_classes(&classes), vec![
            "Polyketide",
            "RiPP",
            "Terpene"
        ]);
    }

    #[test]
    fn test_leave_class_out_scenario() {
        let collection = labelled_collection(SCENARIO_LABELS);
        let splits = scenario_splitter(None).split(&collection).unwrap();
        assert_eq!(splits.len(), 2);

        let (class_x, class_y) = (&splits[0], &splits[1]);

        // classX: train on classY plus half of the negatives, test on
        // both classX samples plus the complementary negative.
        assert_eq!(class_x.train.len(), 2);
        assert!(class_x.train.contains(&4));
        assert_eq!(class_x.test.len(), 3);
        assert!(class_x.test.contains(&2));
        assert!(class_x.test.contains(&3));

        let neg_train: Vec<usize> = class_x
            .train
            .iter()
            .copied()
            .filter(|&idx| idx < 2)
            .collect();
        let neg_test: Vec<usize> = class_x
            .test
            .iter()
            .copied()
            .filter(|&idx| idx < 2)
            .collect();
        assert_eq!(neg_train.len(), 1);
        assert_eq!(neg_test.len(), 1);
        assert_ne!(neg_train[0], neg_test[0]);

        // classY: train on classX plus the same negative half, test on
        // the classY sample plus the same complementary negative.
        assert!(class_y.train.contains(&2));
        assert!(class_y.train.contains(&3));
        assert!(!class_y.train.contains(&4));
        assert!(class_y.test.contains(&4));
        assert!(class_y.train.contains(&neg_train[0]));
        assert!(class_y.test.contains(&neg_test[0]));
    }

    #[test]
    fn test_class_under_test_never_trained_on() {
        let collection = labelled_collection(&[
            "_neg_", "classA", "classB", "classC", "classA", "_neg_", "classB",
        ]);
        let mut splitter = LeaveClassOutSplitter::try_new(
            vec![
                "classA".to_string(),
                "classB".to_string(),
                "classC".to_string(),
            ],
            0.5,
            None,
            3,
        )
        .unwrap();
        let splits = splitter.split(&collection).unwrap();
        let classes = collection.classes();
        for (split, class_name) in splits.iter().zip(["classA", "classB", "classC"]) {
            for &idx in &split.train {
                assert!(!classes[idx].matches(class_name));
            }
            for &idx in &split.test {
                assert!(
                    classes[idx].matches(class_name) || classes[idx].is_negative()
                );
            }
        }
    }

    #[test]
    fn test_upsampling_idempotent_at_natural_size() {
        let collection =
            labelled_collection(&["_neg_", "classX", "classX", "classX", "_neg_"]);
        let mut splitter = LeaveClassOutSplitter::try_new(
            vec!["classX".to_string()],
            0.5,
            Some(3),
            0,
        )
        .unwrap();
        let splits = splitter.split(&collection).unwrap();
        let pos_test: Vec<usize> = splits[0]
            .test
            .iter()
            .copied()
            .filter(|&idx| collection.classes()[idx].matches("classX"))
            .collect();
        assert_eq!(pos_test.len(), 3);
        let mut unique = pos_test.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique, vec![1, 2, 3]);
    }

    #[test]
    fn test_upsampling_reaches_target_and_keeps_originals() {
        let collection = labelled_collection(&["_neg_", "classX", "classX"]);
        let mut splitter = LeaveClassOutSplitter::try_new(
            vec!["classX".to_string()],
            0.5,
            Some(7),
            11,
        )
        .unwrap();
        let splits = splitter.split(&collection).unwrap();
        let pos_test: Vec<usize> = splits[0]
            .test
            .iter()
            .copied()
            .filter(|&idx| collection.classes()[idx].matches("classX"))
            .collect();
        assert_eq!(pos_test.len(), 7);
        assert!(pos_test.contains(&1));
        assert!(pos_test.contains(&2));
    }

    #[test]
    fn test_downsampling_without_replacement() {
        let collection = labelled_collection(&[
            "_neg_", "classX", "classX", "classX", "classX", "classX",
        ]);
        let mut splitter = LeaveClassOutSplitter::try_new(
            vec!["classX".to_string()],
            0.5,
            Some(2),
            5,
        )
        .unwrap();
        let splits = splitter.split(&collection).unwrap();
        let pos_test: Vec<usize> = splits[0]
            .test
            .iter()
            .copied()
            .filter(|&idx| collection.classes()[idx].matches("classX"))
            .collect();
        assert_eq!(pos_test.len(), 2);
        assert_ne!(pos_test[0], pos_test[1]);
    }

    #[test]
    fn test_missing_class_yields_empty_positive_partition() {
        let collection = labelled_collection(&["_neg_", "classX", "_neg_"]);
        let mut splitter = LeaveClassOutSplitter::try_new(
            vec!["classX".to_string(), "classZ".to_string()],
            0.5,
            None,
            0,
        )
        .unwrap();
        let splits = splitter.split(&collection).unwrap();
        assert_eq!(splits.len(), 2);

        let class_z = &splits[1];
        // No classZ samples: the test side is negatives only, the train
        // side is every other positive class plus the negative half.
        assert!(class_z
            .test
            .iter()
            .all(|&idx| collection.classes()[idx].is_negative()));
        assert!(class_z.train.contains(&1));
    }

    #[test]
    fn test_no_negative_samples_fails() {
        let collection = labelled_collection(&["classX", "classY"]);
        let mut splitter = LeaveClassOutSplitter::try_new(
            vec!["classX".to_string()],
            0.5,
            None,
            0,
        )
        .unwrap();
        assert!(matches!(
            splitter.split(&collection),
            Err(SplitError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            LeaveClassOutSplitter::try_new(vec![], 1.5, None, 0),
            Err(SplitError::Configuration(_))
        ));
        assert!(matches!(
            LeaveClassOutSplitter::try_new(vec![], -0.1, None, 0),
            Err(SplitError::Configuration(_))
        ));
        assert!(matches!(
            LeaveClassOutSplitter::try_new(vec![], 0.3, Some(0), 0),
            Err(SplitError::Configuration(_))
        ));
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let labels = [
            "_neg_", "classA", "classB", "_neg_", "classA", "classB", "_neg_",
            "classC",
        ];
        let collection = labelled_collection(&labels);
        let class_names = vec![
            "classA".to_string(),
            "classB".to_string(),
            "classC".to_string(),
        ];
        let splits_a =
            LeaveClassOutSplitter::try_new(class_names.clone(), 0.33, Some(5), 17)
                .unwrap()
                .split(&collection)
                .unwrap();
        let splits_b =
            LeaveClassOutSplitter::try_new(class_names, 0.33, Some(5), 17)
                .unwrap()
                .split(&collection)
                .unwrap();
        for (a, b) in splits_a.iter().zip(splits_b.iter()) {
            assert_eq!(a.train, b.train);
            assert_eq!(a.test, b.test);
            assert_eq!(a.meta, b.meta);
        }
    }

    #[test]
    fn test_split_names_carry_seed_and_group() {
        let collection = labelled_collection(&["_neg_", "classX"]);
        let mut splitter = LeaveClassOutSplitter::try_new(
            vec!["classX".to_string()],
            0.5,
            Some(4),
            9,
        )
        .unwrap();
        let splits = splitter.split(&collection).unwrap();
        assert_eq!(splits[0].meta.name, "classX.seed9");
        assert_eq!(splits[0].meta.group, "classX");
        assert_eq!(splits[0].meta.label, "classX (1 BGCs sampled 4x)");
    }
}

mod bootstrap_tests {
    use hashbrown::HashSet;

    use super::*;
    use crate::data_structs::genome_map::GenomeMap;
    use crate::splitting::bootstrap::GenomeBootstrapSplitter;
    use crate::splitting::{
        SampleSplitter,
        SplitError,
    };

    fn genome_map() -> GenomeMap {
        GenomeMap::new(vec![
            ("genome_1".to_string(), "c1".to_string()),
            ("genome_1".to_string(), "c2".to_string()),
            ("genome_2".to_string(), "c3".to_string()),
            ("genome_2".to_string(), "c4".to_string()),
            ("genome_3".to_string(), "c5".to_string()),
            ("genome_4".to_string(), "c6".to_string()),
            ("genome_4".to_string(), "?".to_string()),
            ("genome_5".to_string(), "?".to_string()),
        ])
    }

    fn contig_collection() -> SampleCollection {
        let contigs = ["c1", "c2", "c3", "c4", "c5", "c6", "c99"];
        SampleCollection::unlabelled(
            contigs
                .iter()
                .map(|contig| domain_sample(contig, &[0, 10]))
                .collect(),
        )
    }

    #[test]
    fn test_genome_level_isolation() {
        let collection = contig_collection();
        let mut splitter =
            GenomeBootstrapSplitter::try_new(genome_map(), 10, 0.75, 3).unwrap();
        let splits = splitter.split(&collection).unwrap();
        assert_eq!(splits.len(), 10);

        for split in &splits {
            let draw = split.genomes.as_ref().unwrap();
            // round(4 * 0.75) genomes drawn with replacement.
            assert_eq!(draw.train_genomes.len(), 3);

            let train_set: HashSet<&str> =
                draw.train_genomes.iter().map(String::as_str).collect();
            for genome in &draw.test_genomes {
                assert!(!train_set.contains(genome.as_str()));
            }

            let train_idx: HashSet<usize> = split.train.iter().copied().collect();
            for idx in &split.test {
                assert!(!train_idx.contains(idx));
            }
        }
    }

    #[test]
    fn test_unknown_contigs_excluded() {
        let collection = contig_collection();
        let mut splitter =
            GenomeBootstrapSplitter::try_new(genome_map(), 5, 0.5, 1).unwrap();
        let splits = splitter.split(&collection).unwrap();
        // Contig c99 is absent from the summary, index 6 never appears.
        for split in &splits {
            assert!(!split.train.contains(&6));
            assert!(!split.test.contains(&6));
        }
    }

    #[test]
    fn test_test_genomes_are_sorted_set_difference() {
        let collection = contig_collection();
        let mut splitter =
            GenomeBootstrapSplitter::try_new(genome_map(), 8, 0.5, 2).unwrap();
        for split in splitter.split(&collection).unwrap() {
            let draw = split.genomes.unwrap();
            let mut sorted = draw.test_genomes.clone();
            sorted.sort();
            assert_eq!(draw.test_genomes, sorted);
        }
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let collection = contig_collection();
        let splits_a = GenomeBootstrapSplitter::try_new(genome_map(), 6, 0.75, 13)
            .unwrap()
            .split(&collection)
            .unwrap();
        let splits_b = GenomeBootstrapSplitter::try_new(genome_map(), 6, 0.75, 13)
            .unwrap()
            .split(&collection)
            .unwrap();
        for (a, b) in splits_a.iter().zip(splits_b.iter()) {
            assert_eq!(a.train, b.train);
            assert_eq!(a.test, b.test);
            assert_eq!(a.genomes, b.genomes);
        }
    }

    #[test]
    fn test_invalid_train_ratio() {
        assert!(matches!(
            GenomeBootstrapSplitter::try_new(genome_map(), 3, 0.0, 0),
            Err(SplitError::Configuration(_))
        ));
        assert!(matches!(
            GenomeBootstrapSplitter::try_new(genome_map(), 3, 1.0, 0),
            Err(SplitError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_genome_map_fails() {
        let collection = contig_collection();
        let mut splitter =
            GenomeBootstrapSplitter::try_new(GenomeMap::default(), 3, 0.5, 0).unwrap();
        assert!(matches!(
            splitter.split(&collection),
            Err(SplitError::Configuration(_))
        ));
    }
}

mod merge_tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::data_structs::schema::DomainSchema;
    use crate::splitting::merge::merge_samples;

    fn merge_collection() -> SampleCollection {
        SampleCollection::unlabelled(vec![
            domain_sample("CONTIG_A", &[1, 2]),
            domain_sample("CONTIG_B", &[3]),
            domain_sample("CONTIG_C", &[4, 5, 6]),
        ])
    }

    fn gene_starts(frame: &DataFrame) -> Vec<i64> {
        frame
            .column("gene_start")
            .unwrap()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    }

    #[test]
    fn test_merge_preserves_index_and_record_order() {
        let collection = merge_collection();
        let mut rng = StdRng::seed_from_u64(0);
        let merged = merge_samples(&collection, &[2, 0], false, &mut rng).unwrap();
        assert_eq!(gene_starts(&merged), vec![4, 5, 6, 1, 2]);
    }

    #[test]
    fn test_merge_empty_indices() {
        let collection = merge_collection();
        let mut rng = StdRng::seed_from_u64(0);
        let merged = merge_samples(&collection, &[], true, &mut rng).unwrap();
        assert_eq!(merged.height(), 0);
        assert_eq!(
            merged.get_column_names_str(),
            DomainSchema::col_names().to_vec()
        );
    }

    #[test]
    fn test_merge_with_duplicate_indices() {
        let collection = merge_collection();
        let mut rng = StdRng::seed_from_u64(0);
        let merged = merge_samples(&collection, &[1, 1, 1], false, &mut rng).unwrap();
        assert_eq!(gene_starts(&merged), vec![3, 3, 3]);
    }

    #[test]
    fn test_shuffled_merge_keeps_contents_and_is_seeded() {
        let collection = merge_collection();

        let mut rng_a = ChaCha8Rng::seed_from_u64(5);
        let merged_a = merge_samples(&collection, &[0, 1, 2], true, &mut rng_a).unwrap();
        let mut rng_b = ChaCha8Rng::seed_from_u64(5);
        let merged_b = merge_samples(&collection, &[0, 1, 2], true, &mut rng_b).unwrap();
        assert_eq!(gene_starts(&merged_a), gene_starts(&merged_b));

        let mut sorted = gene_starts(&merged_a);
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
    }
}

mod orchestrator_tests {
    use super::*;
    use crate::splitting::kfold::KFoldSplitter;
    use crate::splitting::orchestrator::SplitOrchestrator;

    #[test]
    fn test_generate_merges_every_fold() {
        let collection = unlabelled_collection(6);
        let mut splitter = KFoldSplitter::new(3, 0);
        let mut orchestrator = SplitOrchestrator::new(false, true, 0);
        let splits = orchestrator.generate(&collection, &mut splitter).unwrap();

        assert_eq!(splits.len(), 3);
        let total = collection.total_domains();
        for (fold, split) in splits.iter().enumerate() {
            assert_eq!(split.meta.name, format!("fold{}", fold + 1));
            assert_eq!(split.train.height() + split.test.height(), total);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let collection = unlabelled_collection(8);

        let run = |seed| {
            let mut splitter = KFoldSplitter::new(4, seed);
            let mut orchestrator = SplitOrchestrator::new(true, true, seed);
            orchestrator.generate(&collection, &mut splitter).unwrap()
        };
        let splits_a = run(3);
        let splits_b = run(3);
        for (a, b) in splits_a.iter().zip(splits_b.iter()) {
            assert!(a.train.equals(&b.train));
            assert!(a.test.equals(&b.test));
        }
    }
}
