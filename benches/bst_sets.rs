use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_search(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut keys = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        keys.push(key);
    }

    c.bench_function("bench btreeset search", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_btreeset_delete(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let keys = (0..NUM_OF_OPERATIONS)
        .map(|_| rng.next_u32())
        .collect::<Vec<u32>>();

    c.bench_function("bench btreeset delete", move |b| {
        b.iter(|| {
            let mut set = keys.iter().cloned().collect::<BTreeSet<u32>>();
            for key in &keys {
                black_box(set.remove(key));
            }
        })
    });
}

macro_rules! bst_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_sets::$module_name::$type_name;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;
                use criterion::{Criterion, black_box};

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut set = $type_name::new();
                        for _ in 0..NUM_OF_OPERATIONS {
                            set.insert(rng.next_u32());
                        }
                    }));
                }

                pub fn bench_search(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut keys = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        set.insert(key);
                        keys.push(key);
                    }

                    c.bench_function(&format!("bench {} search", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(set.search(key));
                        }
                    }));
                }

                pub fn bench_delete(c: &mut Criterion) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let keys = (0..NUM_OF_OPERATIONS)
                        .map(|_| rng.next_u32())
                        .collect::<Vec<u32>>();

                    c.bench_function(&format!("bench {} delete", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set = keys.iter().cloned().collect::<$type_name<u32>>();
                        for key in &keys {
                            black_box(set.delete(key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_insert,
            bench_btreeset_search,
            bench_btreeset_delete,
            $(
                $module_name::bench_insert,
                $module_name::bench_search,
                $module_name::bench_delete,
            )*
        );
    }
}

bst_set_benches!(
    avl_tree: AvlSet,
    red_black_tree: RedBlackSet,
);

criterion_main!(benches);
