use app_containers::collections::circ::Queue;
use app_containers::collections::contiguous::ArrayList;
use app_containers::collections::hash::{HashMap, HashSet};
use app_containers::collections::light_weight::LightWeightMap;
use app_containers::collections::sparse::PlainArray;
use app_containers::collections::tree::{TreeMap, TreeSet};

fn main() {
    println!("\n[ArrayList]\n");

    let mut list = ArrayList::new();
    for i in 1..=3 {
        list.add(i);
    }
    println!("{list}");
    list.insert(1, 9);
    println!("{list}");
    let removed = list.remove_by_index(0);
    println!("removed {removed}, left {list}");
    println!("{list:?}");

    println!("\n[Queue]\n");

    let mut queue = Queue::with_cap(8);
    for i in 0..=8 {
        queue.add(i);
    }
    println!("{queue:?}");
    while let Some(front) = queue.pop() {
        print!("{front} ");
    }
    println!("\ncap after draining: {}", queue.cap());

    println!("\n[PlainArray]\n");

    let mut sparse = PlainArray::new();
    sparse.add(5, 'a');
    sparse.add(1, 'b');
    sparse.add(3, 'c');
    println!("{sparse}");
    println!("get(3) = {:?}, index of key 5 = {:?}", sparse.get(3), sparse.get_index_of_key(5));

    println!("\n[HashMap / HashSet]\n");

    let mut map = HashMap::<_, _>::new();
    map.set("one", 1);
    map.set("two", 2);
    map.set("one", 11);
    println!("{map}, len {}", map.len());
    println!("{map:?}");

    let set: HashSet<_> = [3, 1, 3, 2].into_iter().collect();
    println!("{set}, len {}", set.len());

    println!("\n[LightWeightMap]\n");

    let mut compact = LightWeightMap::<_, _>::new();
    compact.set("b", 2);
    compact.set("a", 1);
    println!("{compact}");
    println!("key at 0 = {:?}", compact.get_key_at(0));

    println!("\n[TreeMap / TreeSet]\n");

    let tree: TreeMap<_, _> = [5, 3, 8, 1, 4].into_iter().map(|k| (k, k * 10)).collect();
    println!("{tree}");
    println!(
        "first {:?}, last {:?}, lower(5) {:?}, higher(5) {:?}",
        tree.get_first_key(),
        tree.get_last_key(),
        tree.get_lower_key(&5),
        tree.get_higher_key(&5),
    );

    let words: TreeSet<_> = ["pear", "apple", "fig", "apple"].into_iter().collect();
    println!("{words}");
}
