//! Example walking through the query surface on numbers and on a small
//! employee/project dataset.
//!
//! Run with: `RUST_LOG=linq=trace cargo run -p linq --example employees`

use linq::{DESCENDING, Result, from};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Description {
    i: i32,
    desc: &'static str,
}

#[derive(Debug, Clone)]
struct Employee {
    id: u32,
    proj_id: u32,
    name: &'static str,
}

#[derive(Debug, Clone)]
struct Project {
    id: u32,
    name: &'static str,
}

#[derive(Debug, Clone)]
struct EmployeeProject {
    employee: (u32, &'static str),
    proj_name: &'static str,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let nums = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    println!("Filtering and ordering");
    let evens = from(&nums).filter(|n| n % 2 == 0).ordered_by(DESCENDING);
    let odds = from(&nums).filter(|n| n % 2 == 1).ordered_by(DESCENDING);
    println!("   evens: {:?}", evens.as_slice());
    println!("   odds:  {:?}", odds.as_slice());

    let even_descs = evens.select(|n| Description { i: *n, desc: "even" });
    let odd_descs = odds.select(|n| Description { i: *n, desc: "odd" });
    for d in even_descs.iter().chain(&odd_descs) {
        println!("   {} is {}", d.i, d.desc);
    }

    println!("\nElement access");
    let seq = from(&nums);
    println!("   first:                 {}", seq.first()?);
    println!("   first even:            {}", seq.first_where(|n| n % 2 == 0)?);
    println!("   first == 11 or 0:      {}", seq.first_or_default(0, |n| *n == 11));
    println!("   last:                  {}", seq.last()?);
    println!("   last < 10:             {}", seq.last_where(|n| *n < 10)?);
    println!("   last > 10 or 0:        {}", seq.last_or_default(0, |n| *n > 10));
    println!("   sum:                   {}", seq.sum(|n| *n));

    let odd_vec: Vec<i32> = seq.filter(|n| n % 2 == 1).to_vec();
    println!("   odds as Vec:           {odd_vec:?}");

    println!("\nJoining employees to projects");
    let employees = from([
        Employee { id: 0, proj_id: 0, name: "Joe" },
        Employee { id: 1, proj_id: 1, name: "Jane" },
        Employee { id: 2, proj_id: 1, name: "Alex" },
    ]);
    let projects = from(vec![
        Project { id: 0, name: "Financial Inc." },
        Project { id: 1, name: "Contracts R Us" },
    ]);

    let merged = employees.merge_join(
        &projects,
        |e, p| EmployeeProject {
            employee: (e.id, e.name),
            proj_name: p.name,
        },
        |e, p| e.proj_id == p.id,
    );

    let paired = employees
        .join(&projects, |e, p| e.proj_id == p.id)
        .select(|pair| EmployeeProject {
            employee: (pair.left.id, pair.left.name),
            proj_name: pair.right.name,
        });

    for (a, b) in merged.iter().zip(&paired) {
        assert_eq!(a.employee, b.employee);
        println!("   {} ({}) works on {}", a.employee.1, a.employee.0, a.proj_name);
    }

    let names = employees.to_map_with(|e| e.id, |e| e.name);
    let mut ids: Vec<_> = names.keys().copied().collect();
    ids.sort_unstable();
    for id in ids {
        println!("   id {id} -> {}", names[&id]);
    }

    for group in &employees.group_by(|e| e.proj_id) {
        println!(
            "   project {} has {} employee(s)",
            group.key,
            group.items.len()
        );
    }

    Ok(())
}
