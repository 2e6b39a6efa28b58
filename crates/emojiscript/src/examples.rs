//! Built-in markup example programs.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Example {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub code: &'static str,
}

pub const EXAMPLES: &[Example] = &[
    Example {
        title: "Hello World",
        description: "Basic console output",
        category: "basics",
        code: r#"<print>"Hello, World!"</print>"#,
    },
    Example {
        title: "Variables",
        description: "Declare variables and constants",
        category: "basics",
        code: r#"<const name="user" value="'Alice'"/>
<let name="age" value="25"/>
<let name="active" value="true"/>"#,
    },
    Example {
        title: "Function",
        description: "Function with parameters",
        category: "functions",
        code: r#"<function name="greet" params="name">
  <return>"Hello, " + name</return>
</function>
<print>greet("World")</print>"#,
    },
    Example {
        title: "Arrow Function",
        description: "Arrow function syntax",
        category: "functions",
        code: r#"<const name="add" value="(a, b) => a + b"/>
<print>add(5, 3)</print>"#,
    },
    Example {
        title: "If/Else",
        description: "Conditional logic",
        category: "control",
        code: r#"<let name="age" value="20"/>
<if condition="age >= 18">
  <print>"Adult"</print>
</if>
<else>
  <print>"Minor"</print>
</else>"#,
    },
    Example {
        title: "For Loop",
        description: "Loop from 0 to 5",
        category: "loops",
        code: r#"<loop var="i" from="0" to="5">
  <print>i</print>
</loop>"#,
    },
    Example {
        title: "ForEach Loop",
        description: "Iterate over array",
        category: "loops",
        code: r#"<const name="items" value="['apple', 'banana', 'orange']"/>
<loop var="item" in="items">
  <print>item</print>
</loop>"#,
    },
    Example {
        title: "While Loop",
        description: "Loop while condition is true",
        category: "loops",
        code: r#"<let name="count" value="0"/>
<while condition="count < 3">
  <print>count</print>
  count++
</while>"#,
    },
    Example {
        title: "Class",
        description: "Create a class with methods",
        category: "classes",
        code: r#"<class name="Person">
  <method name="constructor" params="name">
    this.name = name
  </method>
  <method name="greet">
    <return>"Hi, " + this.name</return>
  </method>
</class>
<const name="p" value="new Person('Alice')"/>
<print>p.greet()</print>"#,
    },
    Example {
        title: "Array Map",
        description: "Transform array with map",
        category: "arrays",
        code: r#"<const name="nums" value="[1, 2, 3, 4, 5]"/>
<const name="doubled" value="nums.map(n => n * 2)"/>
<print>doubled</print>"#,
    },
    Example {
        title: "Array Filter",
        description: "Filter array elements",
        category: "arrays",
        code: r#"<const name="nums" value="[1, 2, 3, 4, 5]"/>
<const name="evens" value="nums.filter(n => n % 2 === 0)"/>
<print>evens</print>"#,
    },
    Example {
        title: "Async Function",
        description: "Async/await pattern",
        category: "async",
        code: r#"<function name="fetchData" params="url" async="true">
  <const name="response" value="await fetch(url)"/>
  <return>await response.json()</return>
</function>"#,
    },
];
