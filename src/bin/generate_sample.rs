use serde::Serialize;

/// One output row, serialized with the source column names (`Publisher`
/// keeps its capitalized header).
#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    year: i32,
    #[serde(rename = "Publisher")]
    publisher: &'a str,
    keywords: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let kinds = ["Article", "Article", "Article", "Conference", "Conference"];
    let publishers = [
        "IEEE Access",
        "IEEE Transactions on Industrial Informatics",
        "Springer International Publishing",
        "Springer Nature",
        "Nature Communications",
        "Elsevier",
        "ACM",
        "MDPI",
    ];
    let keyword_pool = [
        "security",
        "iot",
        "machine learning",
        "blockchain",
        "edge computing",
        "privacy",
        "smart grid",
        "digital twin",
        "anomaly detection",
        "deep learning",
        "industry 4.0",
        "wireless sensor networks",
        "fog computing",
        "intrusion detection",
        "federated learning",
        "cyber-physical systems",
        "5g",
        "energy efficiency",
    ];

    let output_path = "database.csv";
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(output_path)
        .expect("Failed to create output file");

    let rows = 60;
    for _ in 0..rows {
        let n_keywords = 2 + rng.below(3);
        let mut keywords: Vec<&str> = Vec::with_capacity(n_keywords);
        for _ in 0..n_keywords {
            let kw = *rng.pick(&keyword_pool);
            if !keywords.contains(&kw) {
                keywords.push(kw);
            }
        }

        writer
            .serialize(Row {
                kind: *rng.pick(&kinds),
                year: 2016 + rng.below(9) as i32,
                publisher: *rng.pick(&publishers),
                keywords: keywords.join("; "),
            })
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} records to {output_path}");
}
