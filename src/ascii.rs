pub const ASCII: &str = r#"
            *    *    *
            |    |    |
           {~}  {~}  {~}
        .-'-------------'-.
       /  ~  ~  ~  ~  ~  ~ \
      |~~~~~~~~~~~~~~~~~~~~~|
      |   .  *   .   *   .  |
      |~~~~~~~~~~~~~~~~~~~~~|
   .--'---------------------'--.
  /  o   o   o   o   o   o   o  \
 |~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~|
 |    *     .     *     .     *  |
 |~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~|
  \_____________________________/
"#;
